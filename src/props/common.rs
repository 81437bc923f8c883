//! Props shared by every list-scoped action.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{OptionSource, OptionsContext, PropDefinition, PropKind};
use crate::error::{ClickUpError, Result};
use crate::types::opt_string_or_number;

/// The workspace → space → folder → list selection chain.
///
/// Actions embed this with `#[serde(flatten)]` and add their own fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProps {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub workspace_id: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub space_id: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub folder_id: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub list_id: Option<String>,
}

impl ListProps {
    pub fn for_list(list_id: impl Into<String>) -> Self {
        Self {
            list_id: Some(list_id.into()),
            ..Default::default()
        }
    }

    /// The selected list, which must be present and non-blank. The id is
    /// returned exactly as given.
    pub fn require_list_id(&self) -> Result<&str> {
        self.list_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ClickUpError::invalid_input("listId is required"))
    }

    /// Snapshot of the selection for option lookups.
    pub fn options_context(&self) -> OptionsContext {
        OptionsContext {
            workspace_id: self.workspace_id.clone(),
            space_id: self.space_id.clone(),
            folder_id: self.folder_id.clone(),
        }
    }

    /// Declarations for the chain, in dependency order.
    pub fn definitions() -> Vec<PropDefinition> {
        vec![
            PropDefinition::new(
                "workspaceId",
                "Workspace",
                "The ID of a workspace",
                PropKind::String,
            )
            .with_source(OptionSource::Workspaces),
            PropDefinition::new("spaceId", "Space", "The ID of a space", PropKind::String)
                .with_source(OptionSource::Spaces),
            PropDefinition::new("folderId", "Folder", "The ID of a folder", PropKind::String)
                .optional()
                .with_source(OptionSource::Folders),
            PropDefinition::new(
                "listId",
                "List",
                "The ID of a list. Lists outside any folder are offered when no folder is selected",
                PropKind::String,
            )
            .with_source(OptionSource::Lists),
        ]
    }
}

/// `{"workspaceId": ..}` style context for hosts that pass raw JSON.
pub fn context_from_json(value: &serde_json::Value) -> Result<OptionsContext> {
    let props: ListProps = serde_json::from_value(if value.is_null() {
        json!({})
    } else {
        value.clone()
    })?;
    Ok(props.options_context())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_props_accepts_numeric_ids() {
        let props: ListProps = serde_json::from_value(json!({
            "workspaceId": 9001,
            "spaceId": "55",
            "listId": 901100
        }))
        .unwrap();

        assert_eq!(props.workspace_id.as_deref(), Some("9001"));
        assert_eq!(props.space_id.as_deref(), Some("55"));
        assert!(props.folder_id.is_none());
        assert_eq!(props.require_list_id().unwrap(), "901100");
    }

    #[test]
    fn test_require_list_id() {
        assert!(ListProps::default().require_list_id().is_err());
        assert!(ListProps::for_list("   ").require_list_id().is_err());
        assert_eq!(ListProps::for_list(" 42 ").require_list_id().unwrap(), " 42 ");
    }

    #[test]
    fn test_definitions_order() {
        let keys: Vec<&str> = ListProps::definitions().iter().map(|p| p.key).collect();
        assert_eq!(keys, vec!["workspaceId", "spaceId", "folderId", "listId"]);
    }

    #[test]
    fn test_context_from_json() {
        let ctx = context_from_json(&json!({ "spaceId": "55", "folderId": null })).unwrap();
        assert_eq!(ctx.space_id.as_deref(), Some("55"));
        assert!(ctx.folder_id.is_none());

        assert_eq!(
            context_from_json(&serde_json::Value::Null).unwrap(),
            OptionsContext::default()
        );
    }
}
