use std::collections::BTreeMap;
use std::path::Path;

use crate::escape::{escape_attr, escape_text};
use crate::local_path::resolve_local;

pub const PARAM_NAME: &str = "Name";
pub const PARAM_LOCAL: &str = "Local";
pub const PARAM_IMAGE_NUMBER: &str = "ImageNumber";

/// `<param name=.. value=..>` pairs of one `<object>` block.
///
/// Keys are case-sensitive. A later duplicate key replaces an earlier one;
/// empty values are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectParams {
    values: BTreeMap<String, String>,
}

impl ObjectParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn name(&self) -> &str {
        self.get(PARAM_NAME).unwrap_or("")
    }

    pub fn local(&self) -> Option<&str> {
        self.get(PARAM_LOCAL)
    }

    pub fn image_number(&self) -> Option<&str> {
        self.get(PARAM_IMAGE_NUMBER)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ObjectParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = ObjectParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// How a single `<object>` node is rendered as a list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeRender {
    /// Navigable page: `<a href=.. target=..>`.
    Link { href: String, label: String },
    /// Folder node without a target page.
    Section { label: String },
    /// Anything else.
    Label { label: String },
}

impl NodeRender {
    /// Pick the render mode by presence: `Local` beats `ImageNumber` beats neither.
    pub fn select(params: &ObjectParams, source_dir: &Path) -> Self {
        let label = params.name().to_string();
        if let Some(local) = params.local() {
            NodeRender::Link {
                href: resolve_local(local, source_dir),
                label,
            }
        } else if params.image_number().is_some() {
            NodeRender::Section { label }
        } else {
            NodeRender::Label { label }
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NodeRender::Link { label, .. }
            | NodeRender::Section { label }
            | NodeRender::Label { label } => label,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, NodeRender::Link { .. })
    }

    /// Markup placed inside the item's `<li>`; links open in `target`.
    pub fn to_html(&self, target: &str) -> String {
        match self {
            NodeRender::Link { href, label } => format!(
                r#"<a href="{}" target="{}">{}</a>"#,
                escape_attr(href),
                escape_attr(target),
                escape_text(label)
            ),
            NodeRender::Section { label } => {
                format!(r#"<span class="section">{}</span>"#, escape_text(label))
            }
            NodeRender::Label { label } => escape_text(label),
        }
    }
}
