//! Field tree as read from an AcroForm

/// Variant of a field node, carrying only what that variant needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-terminal field organizing child fields
    Container(Vec<FieldNode>),
    /// Text field with its string value (empty when unset)
    Text { value: String },
    /// Check box with its checked state
    CheckBox { checked: bool },
    /// Signature field with its string value (empty when unsigned)
    Signature { value: String },
    /// Any other terminal field (choice, radio group, push button, untyped)
    Other,
}

/// A node of the field tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
    /// Dot-joined partial names from the root to this field
    pub fully_qualified_name: String,
    pub kind: FieldKind,
}

impl FieldNode {
    pub fn container(name: impl Into<String>, children: Vec<FieldNode>) -> Self {
        Self {
            fully_qualified_name: name.into(),
            kind: FieldKind::Container(children),
        }
    }

    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            fully_qualified_name: name.into(),
            kind: FieldKind::Text {
                value: value.into(),
            },
        }
    }

    pub fn check_box(name: impl Into<String>, checked: bool) -> Self {
        Self {
            fully_qualified_name: name.into(),
            kind: FieldKind::CheckBox { checked },
        }
    }

    pub fn signature(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            fully_qualified_name: name.into(),
            kind: FieldKind::Signature {
                value: value.into(),
            },
        }
    }

    pub fn other(name: impl Into<String>) -> Self {
        Self {
            fully_qualified_name: name.into(),
            kind: FieldKind::Other,
        }
    }

    /// Child fields of a container; empty for terminal fields
    pub fn children(&self) -> &[FieldNode] {
        match &self.kind {
            FieldKind::Container(children) => children,
            _ => &[],
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, FieldKind::Container(_))
    }

    /// Number of nodes in this subtree, including this one
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(FieldNode::count).sum::<usize>()
    }
}
