//! Declared input fields ("props") for ClickUp actions.
//!
//! A prop either carries a static option list or names an [`OptionSource`]
//! that is resolved against ClickUp on demand, using the values already
//! selected for the fields it depends on.

pub mod common;
pub mod options;

pub use common::ListProps;
pub use options::{resolve_options, OptionsContext};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value type of a prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropKind {
    String,
    Boolean,
    Integer,
    StringArray,
}

/// One selectable choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropOption {
    pub label: String,
    pub value: String,
}

impl PropOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// ClickUp lookups that can populate a prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionSource {
    Workspaces,
    Spaces,
    Folders,
    Lists,
    Assignees,
}

impl OptionSource {
    /// Props whose values this source reads from the [`OptionsContext`].
    pub fn depends_on(&self) -> &'static [&'static str] {
        match self {
            OptionSource::Workspaces => &[],
            OptionSource::Spaces | OptionSource::Assignees => &["workspaceId"],
            OptionSource::Folders => &["spaceId"],
            OptionSource::Lists => &["folderId", "spaceId"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values", rename_all = "snake_case")]
pub enum PropOptions {
    Static(Vec<PropOption>),
    Dynamic(OptionSource),
}

/// Declaration of a single action input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub kind: PropKind,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<PropOptions>,
}

impl PropDefinition {
    pub fn new(
        key: &'static str,
        label: &'static str,
        description: &'static str,
        kind: PropKind,
    ) -> Self {
        Self {
            key,
            label,
            description,
            kind,
            optional: false,
            default: None,
            min: None,
            options: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_static_options<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = values
            .into_iter()
            .map(|v| {
                let v = v.into();
                PropOption::new(v.clone(), v)
            })
            .collect();
        self.options = Some(PropOptions::Static(options));
        self
    }

    pub fn with_source(mut self, source: OptionSource) -> Self {
        self.options = Some(PropOptions::Dynamic(source));
        self
    }

    /// The dynamic lookup backing this prop, if any.
    pub fn source(&self) -> Option<OptionSource> {
        match self.options {
            Some(PropOptions::Dynamic(source)) => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prop_definition_builder() {
        let prop = PropDefinition::new("page", "Page", "The page number", PropKind::Integer)
            .optional()
            .with_min(0)
            .with_default(json!(0));

        assert!(prop.optional);
        assert_eq!(prop.min, Some(0));
        assert_eq!(prop.default, Some(json!(0)));
        assert!(prop.source().is_none());
    }

    #[test]
    fn test_static_options_use_value_as_label() {
        let prop = PropDefinition::new("orderBy", "Order By", "", PropKind::String)
            .with_static_options(["id", "created"]);

        assert_eq!(
            prop.options,
            Some(PropOptions::Static(vec![
                PropOption::new("id", "id"),
                PropOption::new("created", "created"),
            ]))
        );
    }

    #[test]
    fn test_source_dependencies() {
        assert!(OptionSource::Workspaces.depends_on().is_empty());
        assert_eq!(OptionSource::Assignees.depends_on(), &["workspaceId"]);
        assert_eq!(OptionSource::Lists.depends_on(), &["folderId", "spaceId"]);
    }

    #[test]
    fn test_prop_definition_serializes() {
        let prop = PropDefinition::new("listId", "List", "", PropKind::String)
            .with_source(OptionSource::Lists);
        let value = serde_json::to_value(&prop).unwrap();

        assert_eq!(value["options"], json!({ "type": "dynamic", "values": "lists" }));
        assert!(value.get("default").is_none());
    }
}
