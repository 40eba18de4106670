//! # pdftool
//!
//! Extracts and classifies the interactive form fields (AcroForm) of PDF
//! documents.
//!
//! ## Features
//!
//! - **Field tree reading**: resolves `/Fields` and `/Kids`, inherited field
//!   types, flags and values on top of the `oxidize-pdf` parser
//! - **Flattening**: every container and terminal field becomes one entry keyed
//!   by its fully-qualified name
//! - **Classification**: text, check box, signature and other fields, each with
//!   only the data relevant to its kind
//! - **Name mapping**: W-8BEN fields are reported under stable API names
//! - **Resource loading**: documents are addressed by source identifiers
//!   resolved below a root directory or served from memory
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdftool::{FileSystemLoader, FormFieldService};
//!
//! # fn main() -> pdftool::Result<()> {
//! let service = FormFieldService::new(FileSystemLoader::new("resources"));
//! let fields = service.form_fields("forms/fw8ben.pdf")?;
//!
//! for (key, field) in &fields {
//!     println!("{key}: {} ({})", field.name, field.field_type);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Working with field trees directly
//!
//! ```rust
//! use pdftool::forms::{flatten_fields, FieldNode, FieldType};
//!
//! let tree = vec![FieldNode::container(
//!     "applicant",
//!     vec![FieldNode::text("applicant.name", "Jan Novak")],
//! )];
//!
//! let fields = flatten_fields(&tree);
//! assert_eq!(fields.len(), 2);
//! assert_eq!(fields["applicant"].field_type, FieldType::Other);
//! assert_eq!(fields["applicant.name"].value.as_deref(), Some("Jan Novak"));
//! ```

pub mod error;
pub mod forms;
pub mod loader;
pub mod service;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use error::{PdfToolError, Result};
pub use forms::{FieldType, FormField, FormFields};
pub use loader::{FileSystemLoader, MemoryLoader, ResourceLoader};
pub use service::{extract_form_fields, FormFieldService};

/// Current version of pdftool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
