//! Dependent option resolution for props backed by an [`OptionSource`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{OptionSource, PropOption};
use crate::client::ClickUpApi;
use crate::error::Result;

/// Values already chosen for the parent fields of a prop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsContext {
    pub workspace_id: Option<String>,
    pub space_id: Option<String>,
    pub folder_id: Option<String>,
}

impl OptionsContext {
    /// Fill in the workspace when the caller has not picked one. A blank
    /// selection counts as not picked.
    pub fn or_workspace(mut self, workspace_id: Option<&str>) -> Self {
        if selected(&self.workspace_id).is_none() {
            self.workspace_id = workspace_id.map(String::from);
        }
        self
    }
}

fn selected(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Look up the choices for `source` given the current selection.
///
/// An unselected parent yields no options rather than an error; the field
/// simply is not resolvable yet. Transport failures propagate.
pub async fn resolve_options(
    source: OptionSource,
    ctx: &OptionsContext,
    api: &dyn ClickUpApi,
) -> Result<Vec<PropOption>> {
    debug!(?source, ?ctx, "Resolving ClickUp prop options");

    let options = match source {
        OptionSource::Workspaces => api
            .get_workspaces()
            .await?
            .into_iter()
            .map(|w| PropOption::new(w.name, w.id))
            .collect(),
        OptionSource::Spaces => match selected(&ctx.workspace_id) {
            Some(workspace_id) => api
                .get_spaces(workspace_id)
                .await?
                .into_iter()
                .map(|s| PropOption::new(s.name, s.id))
                .collect(),
            None => Vec::new(),
        },
        OptionSource::Folders => match selected(&ctx.space_id) {
            Some(space_id) => api
                .get_folders(space_id)
                .await?
                .into_iter()
                .map(|f| PropOption::new(f.name, f.id))
                .collect(),
            None => Vec::new(),
        },
        OptionSource::Lists => {
            let lists = match (selected(&ctx.folder_id), selected(&ctx.space_id)) {
                (Some(folder_id), _) => api.get_lists(folder_id).await?,
                (None, Some(space_id)) => api.get_folderless_lists(space_id).await?,
                (None, None) => Vec::new(),
            };
            lists
                .into_iter()
                .map(|l| PropOption::new(l.name, l.id))
                .collect()
        }
        OptionSource::Assignees => match selected(&ctx.workspace_id) {
            Some(workspace_id) => api
                .get_workspace_members(workspace_id)
                .await?
                .into_iter()
                .map(|m| PropOption::new(m.user.display_name(), m.user.id.clone()))
                .collect(),
            None => Vec::new(),
        },
    };

    Ok(options)
}
