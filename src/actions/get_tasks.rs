#![allow(missing_docs)]

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::{ActionContext, ActionResult, ClickUpAction};
use crate::client::ClickUpApi;
use crate::error::{ClickUpError, Result};
use crate::props::{ListProps, OptionSource, PropDefinition, PropKind};
use crate::types::{string_or_number_vec, TaskOrder, TaskQueryParams};

pub const GET_TASKS_SUMMARY: &str = "Successfully retrieved tasks";

/// Inputs of the Get Tasks action as the host sends them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTasksInput {
    #[serde(flatten)]
    pub list: ListProps,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub order_by: TaskOrder,
    #[serde(
        default,
        deserialize_with = "string_or_number_vec",
        skip_serializing_if = "Option::is_none"
    )]
    pub assignees: Option<Vec<String>>,
}

impl GetTasksInput {
    pub fn new(list_id: impl Into<String>) -> Self {
        Self {
            list: ListProps::for_list(list_id),
            ..Default::default()
        }
    }

    pub fn from_params(params: &serde_json::Value) -> Result<Self> {
        serde_json::from_value(params.clone())
            .map_err(|e| ClickUpError::invalid_input(format!("Get Tasks: {}", e)))
    }

    /// Split into the list path segment and the query sent with it.
    /// `listId` never appears in the query; `orderBy` goes out as `order_by`.
    pub fn assemble(&self) -> Result<(&str, TaskQueryParams)> {
        let list_id = self.list.require_list_id()?;
        let params = TaskQueryParams {
            archived: self.archived,
            order_by: self.order_by,
            assignees: self.assignees.clone().filter(|ids| !ids.is_empty()),
            page: self.page,
        };
        Ok((list_id, params))
    }
}

pub struct GetTasksAction;

#[async_trait]
impl ClickUpAction for GetTasksAction {
    fn key(&self) -> &str {
        "clickup-get-tasks"
    }

    fn name(&self) -> &str {
        "Get Tasks"
    }

    fn description(&self) -> &str {
        "Get a list of tasks. [See the documentation](https://clickup.com/api) in **Tasks / Get Tasks** section."
    }

    fn version(&self) -> &str {
        "0.0.10"
    }

    fn props(&self) -> Vec<PropDefinition> {
        let mut props = ListProps::definitions();
        props.extend([
            PropDefinition::new(
                "archived",
                "Archived",
                "Filter for archived tasks",
                PropKind::Boolean,
            )
            .optional()
            .with_default(json!(false)),
            PropDefinition::new(
                "page",
                "Page",
                "The page number to be returned",
                PropKind::Integer,
            )
            .optional()
            .with_min(0)
            .with_default(json!(0)),
            PropDefinition::new(
                "orderBy",
                "Order By",
                "Order to return tasks",
                PropKind::String,
            )
            .optional()
            .with_static_options(TaskOrder::ALL.iter().map(|o| o.as_str()))
            .with_default(json!(TaskOrder::default().as_str())),
            PropDefinition::new(
                "assignees",
                "Assignees",
                "Filter tasks by the users assigned to them",
                PropKind::StringArray,
            )
            .optional()
            .with_source(OptionSource::Assignees),
        ]);
        props
    }

    async fn run(&self, context: &ActionContext, api: &dyn ClickUpApi) -> Result<ActionResult> {
        let input = GetTasksInput::from_params(&context.params)?;
        let (list_id, params) = input.assemble()?;

        let response = api.get_tasks(list_id, &params).await?;

        info!(list_id, "{}", GET_TASKS_SUMMARY);
        Ok(ActionResult::success(GET_TASKS_SUMMARY, response))
    }
}
