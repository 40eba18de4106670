//! Classified form field records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Classification of an extracted form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldType {
    /// Text field (`/FT /Tx`)
    Text,
    /// Check box (`/FT /Btn` without radio or push button flags)
    Checkbox,
    /// Signature field (`/FT /Sig`)
    Signature,
    /// Containers, choice fields, radio buttons, push buttons
    Other,
}

impl FieldType {
    /// Upper-case label used in JSON output and tables
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "TEXT",
            FieldType::Checkbox => "CHECKBOX",
            FieldType::Signature => "SIGNATURE",
            FieldType::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flattened form field as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Fully-qualified name, or the external API name when one is mapped
    pub name: String,
    /// Field classification
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Raw value for text and signature fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Checked state for check boxes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl FormField {
    /// Create a record with no value and no checked state
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            value: None,
            checked: None,
        }
    }

    /// Set the raw value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the checked state
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }
}

/// Extraction result keyed by the original fully-qualified field name
pub type FormFields = BTreeMap<String, FormField>;
