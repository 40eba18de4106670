//! Flattening of a field tree into a mapping keyed by fully-qualified name

use super::field::{FieldType, FormField, FormFields};
use super::mapping::mapped_name;
use super::tree::{FieldKind, FieldNode};

/// Flatten a sequence of top-level fields into a new mapping.
pub fn flatten_fields(fields: &[FieldNode]) -> FormFields {
    let mut form_fields = FormFields::new();
    process_fields(fields, &mut form_fields);
    form_fields
}

/// Flatten `fields` into `form_fields`.
///
/// Containers are expanded before their own record is inserted, so a container
/// and each of its descendants all appear as separate entries. Records are
/// stored under the original fully-qualified name even when the name mapping
/// renames them; on a key collision the later record replaces the earlier one.
pub fn process_fields(fields: &[FieldNode], form_fields: &mut FormFields) {
    for field in fields {
        let original_name = field.fully_qualified_name.as_str();

        let record = match &field.kind {
            FieldKind::Container(children) => {
                process_fields(children, form_fields);
                FormField::new(original_name, FieldType::Other)
            }
            FieldKind::Text { value } => {
                FormField::new(original_name, FieldType::Text).with_value(value.clone())
            }
            FieldKind::CheckBox { checked } => {
                FormField::new(original_name, FieldType::Checkbox).with_checked(*checked)
            }
            FieldKind::Signature { value } => {
                FormField::new(original_name, FieldType::Signature).with_value(value.clone())
            }
            FieldKind::Other => FormField::new(original_name, FieldType::Other),
        };

        let record = match mapped_name(original_name) {
            Some(api_name) => FormField {
                name: api_name.to_string(),
                ..record
            },
            None => record,
        };

        form_fields.insert(original_name.to_string(), record);
    }
}
