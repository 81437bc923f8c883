//! ElizaOS ClickUp Plugin (Rust)
//!
//! Exposes ClickUp actions together with the prop declarations and
//! option lookups a host needs to render their input forms.

#![allow(missing_docs)]
#![deny(unsafe_code)]

pub mod actions;
pub mod client;
pub mod config;
pub mod error;
pub mod props;
pub mod types;

pub use actions::{
    all_actions, find_action, ActionContext, ActionResult, ClickUpAction, GetTasksAction,
    GetTasksInput,
};
pub use client::{ClickUpApi, ClickUpClient};
pub use config::ClickUpConfig;
pub use error::{ClickUpError, Result};
pub use props::{
    resolve_options, ListProps, OptionSource, OptionsContext, PropDefinition, PropKind,
    PropOption, PropOptions,
};
pub use types::*;

pub const PLUGIN_NAME: &str = "clickup";
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PLUGIN_DESCRIPTION: &str = "ClickUp integration for elizaOS agents";

#[derive(Debug, Clone)]
pub struct Plugin {
    pub name: String,
    pub description: String,
    pub version: String,
    pub actions: Vec<String>,
}

pub fn plugin() -> Plugin {
    Plugin {
        name: PLUGIN_NAME.to_string(),
        description: PLUGIN_DESCRIPTION.to_string(),
        version: PLUGIN_VERSION.to_string(),
        actions: all_actions().iter().map(|a| a.key().to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_creation() {
        let p = plugin();
        assert_eq!(p.name, PLUGIN_NAME);
        assert!(!p.description.is_empty());
        assert_eq!(p.actions, vec!["clickup-get-tasks".to_string()]);
    }
}
