use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfToolError {
    #[error("Invalid source path: {0}")]
    SourceNotFound(String),

    #[error("Error processing PDF: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PdfToolError {
    /// Whether the error came from resolving the source identifier
    pub fn is_source_not_found(&self) -> bool {
        matches!(self, PdfToolError::SourceNotFound(_))
    }
}

impl From<oxidize_pdf::parser::ParseError> for PdfToolError {
    fn from(err: oxidize_pdf::parser::ParseError) -> Self {
        PdfToolError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PdfToolError>;
