//! AcroForm field extraction according to ISO 32000-1 Chapter 12.7
//!
//! This module reads the interactive form field tree of a document, flattens
//! it into a mapping keyed by fully-qualified field name and applies the
//! static W-8BEN name mapping.

mod acroform;
mod field;
mod flatten;
mod mapping;
mod text_string;
mod tree;

pub use acroform::{read_field_tree, FieldFlags, FieldTreeReader};
pub use field::{FieldType, FormField, FormFields};
pub use flatten::{flatten_fields, process_fields};
pub use mapping::{field_mappings, mapped_name, FieldMapping};
pub use text_string::decode_text_string;
pub use tree::{FieldKind, FieldNode};
