#![allow(missing_docs)]

pub mod get_tasks;

pub use get_tasks::{GetTasksAction, GetTasksInput};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::ClickUpApi;
use crate::error::{ClickUpError, Result};
use crate::props::common::context_from_json;
use crate::props::{resolve_options, PropDefinition, PropOption, PropOptions};

/// Configuration object handed to an action by the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionContext {
    pub params: Value,
}

impl ActionContext {
    pub fn new(params: Value) -> Self {
        Self { params }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    /// Human-readable one-liner exported alongside the data
    pub summary: String,
    pub data: Value,
}

impl ActionResult {
    pub fn success(summary: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            summary: summary.into(),
            data,
        }
    }
}

#[async_trait]
pub trait ClickUpAction: Send + Sync {
    /// Stable registry key, e.g. `clickup-get-tasks`
    fn key(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn version(&self) -> &str;
    fn props(&self) -> Vec<PropDefinition>;
    async fn run(&self, context: &ActionContext, api: &dyn ClickUpApi) -> Result<ActionResult>;

    /// Choices for one of this action's props given the values filled in so far.
    /// `default_workspace` stands in when no workspace has been picked yet.
    async fn prop_options(
        &self,
        prop_key: &str,
        params: &Value,
        api: &dyn ClickUpApi,
        default_workspace: Option<&str>,
    ) -> Result<Vec<PropOption>> {
        let prop = self
            .props()
            .into_iter()
            .find(|p| p.key == prop_key)
            .ok_or_else(|| ClickUpError::invalid_input(format!("Unknown prop: {}", prop_key)))?;

        match prop.options {
            Some(PropOptions::Static(options)) => Ok(options),
            Some(PropOptions::Dynamic(source)) => {
                let ctx = context_from_json(params)?.or_workspace(default_workspace);
                resolve_options(source, &ctx, api).await
            }
            None => Ok(Vec::new()),
        }
    }
}

/// Every action this plugin ships.
pub fn all_actions() -> Vec<Box<dyn ClickUpAction>> {
    vec![Box::new(GetTasksAction)]
}

pub fn find_action(key: &str) -> Option<Box<dyn ClickUpAction>> {
    all_actions().into_iter().find(|a| a.key() == key)
}
