//! CMS content model.
//!
//! A story is a page of authored content. Its `content` is a tree of bloks,
//! each naming the component that renders it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Prefix of the visual editor marker embedded in `_editable`.
const EDITABLE_PREFIX: &str = "<!--#storyblok#";

/// Suffix of the visual editor marker.
const EDITABLE_SUFFIX: &str = "-->";

/// A published or draft story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: u64,

    #[serde(default)]
    pub uuid: String,

    pub name: String,

    pub slug: String,

    #[serde(default)]
    pub full_slug: String,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub published_at: Option<String>,

    /// Root content block.
    pub content: Blok,
}

/// A content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blok {
    /// Name of the component that renders this block.
    pub component: String,

    #[serde(rename = "_uid", default)]
    pub uid: String,

    /// Visual editor marker, present in draft content.
    #[serde(rename = "_editable", default, skip_serializing_if = "Option::is_none")]
    pub editable: Option<String>,

    /// Component specific fields.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// HTML attributes that let the visual editor locate a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableAttrs {
    /// Value of `data-blok-c`: the raw marker options.
    pub options: String,
    /// Value of `data-blok-uid`: `{id}-{uid}`.
    pub uid: String,
    /// CSS class for the editor outline.
    pub class: &'static str,
}

#[derive(Deserialize)]
struct EditableMarker {
    id: Value,
    uid: String,
}

impl Blok {
    /// Create a block with no fields.
    pub fn new(component: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            uid: uid.into(),
            editable: None,
            fields: Map::new(),
        }
    }

    /// Set a field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Attach nested blocks under a field.
    pub fn with_children(self, name: impl Into<String>, children: Vec<Blok>) -> Self {
        let values = children
            .into_iter()
            .filter_map(|b| serde_json::to_value(b).ok())
            .collect::<Vec<_>>();
        self.with_field(name, Value::Array(values))
    }

    /// String field value.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Nested blocks under a field. Entries that are not blocks are skipped.
    pub fn children(&self, field: &str) -> Vec<Blok> {
        match self.fields.get(field) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Decode the visual editor marker.
    ///
    /// Returns `None` for published content and for malformed markers.
    pub fn editable_attrs(&self) -> Option<EditableAttrs> {
        let raw = self.editable.as_deref()?;
        let options = raw
            .trim()
            .strip_prefix(EDITABLE_PREFIX)?
            .strip_suffix(EDITABLE_SUFFIX)?;
        let marker: EditableMarker = serde_json::from_str(options).ok()?;
        let id = match marker.id {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            _ => return None,
        };

        Some(EditableAttrs {
            options: options.to_string(),
            uid: format!("{id}-{}", marker.uid),
            class: "storyblok__outline",
        })
    }
}

/// Envelope returned by the single story endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryResponse {
    pub story: Story,
}
