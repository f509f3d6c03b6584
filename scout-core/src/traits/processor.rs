use crate::models::document::Document;

/// Document cleaning and validation, applied before indexing.
pub trait IDocumentProcessor: Send + Sync {
    /// Normalize raw text (whitespace, punctuation runs).
    fn clean(&self, text: &str) -> String;

    /// Whether a document meets the minimum quality bar for indexing.
    fn validate(&self, document: &Document) -> bool;
}
