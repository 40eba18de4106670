//! Form field extraction from loaded documents

use crate::error::Result;
use crate::forms::{flatten_fields, read_field_tree, FormFields};
use crate::loader::ResourceLoader;
use oxidize_pdf::parser::PdfReader;
use std::io::Cursor;
use tracing::{debug, error};

/// Extract the flattened form fields of a PDF held in memory.
///
/// A document without an AcroForm yields an empty mapping. Any parse failure
/// abandons the whole extraction.
pub fn extract_form_fields(bytes: Vec<u8>) -> Result<FormFields> {
    let mut reader = PdfReader::new(Cursor::new(bytes))?;
    let tree = read_field_tree(&mut reader)?;
    Ok(flatten_fields(&tree))
}

/// Loads documents through a [`ResourceLoader`] and extracts their form fields
#[derive(Debug, Clone)]
pub struct FormFieldService<L> {
    loader: L,
}

impl<L: ResourceLoader> FormFieldService<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Extract the form fields of the document at `source_path`.
    pub fn form_fields(&self, source_path: &str) -> Result<FormFields> {
        debug!("Loading resource from path: {}", source_path);
        let bytes = self.loader.load(source_path).inspect_err(|e| {
            if e.is_source_not_found() {
                error!("Resource does not exist at path: {}", source_path);
            } else {
                error!("Failed to load resource {}: {}", source_path, e);
            }
        })?;

        let fields = self.form_fields_from_bytes(bytes)?;
        debug!("Extracted {} form fields from {}", fields.len(), source_path);
        Ok(fields)
    }

    /// Extract the form fields of a document that is already in memory.
    pub fn form_fields_from_bytes(&self, bytes: Vec<u8>) -> Result<FormFields> {
        extract_form_fields(bytes).inspect_err(|e| error!("Error processing PDF: {}", e))
    }
}
