//! # pdftool-api
//!
//! REST API server for pdftool form field extraction
//!

mod api;
pub mod config;

pub use api::{
    app, form_fields, health_check, list_mappings, upload_form_fields, AppError, AppState,
    ErrorResponse, FormFieldsQuery, MappingEntry,
};
pub use config::ApiConfig;
