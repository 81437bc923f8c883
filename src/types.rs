#![allow(missing_docs)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ClickUpError;

/// Sort key accepted by the Get Tasks endpoint's `order_by` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskOrder {
    Id,
    #[default]
    Created,
    Updated,
    DueDate,
}

impl TaskOrder {
    pub const ALL: [TaskOrder; 4] = [
        TaskOrder::Id,
        TaskOrder::Created,
        TaskOrder::Updated,
        TaskOrder::DueDate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskOrder::Id => "id",
            TaskOrder::Created => "created",
            TaskOrder::Updated => "updated",
            TaskOrder::DueDate => "due_date",
        }
    }
}

impl fmt::Display for TaskOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskOrder {
    type Err = ClickUpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| {
                ClickUpError::invalid_input(format!(
                    "orderBy must be one of id, created, updated, due_date (got {})",
                    s
                ))
            })
    }
}

/// Query parameters sent to `GET /list/{list_id}/task`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskQueryParams {
    pub archived: bool,
    pub order_by: TaskOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    pub page: u32,
}

impl TaskQueryParams {
    /// Flatten into URL query pairs. Each assignee becomes its own
    /// `assignees[]` entry, which is the array form ClickUp reads.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("archived".to_string(), self.archived.to_string()),
            ("order_by".to_string(), self.order_by.to_string()),
        ];
        if let Some(assignees) = &self.assignees {
            pairs.extend(
                assignees
                    .iter()
                    .map(|id| ("assignees[]".to_string(), id.clone())),
            );
        }
        pairs.push(("page".to_string(), self.page.to_string()));
        pairs
    }
}

/// A ClickUp workspace. The REST API calls these "teams".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub user: ClickUpUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickUpUser {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ClickUpUser {
    /// Name shown in option pickers: username, then email, then the raw id.
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub archived: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub archived: bool,
}

/// A ClickUp list, the container tasks belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub archived: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TeamsResponse {
    pub teams: Vec<Workspace>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpacesResponse {
    pub spaces: Vec<Space>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FoldersResponse {
    pub folders: Vec<Folder>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListsResponse {
    pub lists: Vec<TaskList>,
}

/// ClickUp mixes numeric and string identifiers; normalize to strings.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Num(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s,
        Id::Num(n) => n.to_string(),
    })
}

#[derive(Deserialize)]
struct FlexibleId(#[serde(deserialize_with = "string_or_number")] String);

pub(crate) fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id: Option<FlexibleId> = Option::deserialize(deserializer)?;
    Ok(id.map(|FlexibleId(id)| id))
}

pub(crate) fn string_or_number_vec<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids: Option<Vec<FlexibleId>> = Option::deserialize(deserializer)?;
    Ok(ids.map(|ids| ids.into_iter().map(|FlexibleId(id)| id).collect()))
}
