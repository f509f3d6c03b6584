//! Document cleaning and validation.
//!
//! Everything a source returns passes through here before it can reach
//! the index: text normalization, minimum-quality checks, and identity
//! repairs (missing ids, stale content hashes).

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use scout_core::models::document::Document;
use scout_core::traits::IDocumentProcessor;

use crate::enhancement::DOMAIN_VOCABULARY;

const MIN_TITLE_LEN: usize = 10;
const MIN_ABSTRACT_LEN: usize = 50;
/// Minimum fraction of title+abstract tokens that must be domain terms.
const MIN_KEYWORD_RATIO: f64 = 0.05;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static REPEATED_PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{2,}").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentProcessor;

impl DocumentProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Clean a document's text fields and repair its identity: a blank id
    /// gets a fresh UUID, and the content hash is recomputed from the
    /// cleaned text.
    pub fn prepare(&self, mut document: Document) -> Document {
        document.title = self.clean(&document.title);
        document.abstract_text = self.clean(&document.abstract_text);
        if document.id.trim().is_empty() {
            document.id = uuid::Uuid::new_v4().to_string();
        }
        document.text_hash = document.compute_text_hash();
        document
    }

    fn keyword_ratio(&self, document: &Document) -> f64 {
        let text = format!("{} {}", document.title, document.abstract_text);
        let tokens: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric() && c != '-')
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase())
            .collect();
        if tokens.is_empty() {
            return 0.0;
        }
        let hits = tokens
            .iter()
            .filter(|t| DOMAIN_VOCABULARY.contains(&t.as_str()))
            .count();
        hits as f64 / tokens.len() as f64
    }
}

impl IDocumentProcessor for DocumentProcessor {
    fn clean(&self, text: &str) -> String {
        let collapsed = WHITESPACE_RE.replace_all(text, " ");
        let depunctuated = REPEATED_PUNCTUATION_RE.replace_all(&collapsed, ".");
        depunctuated.trim().to_string()
    }

    fn validate(&self, document: &Document) -> bool {
        if document.title.len() < MIN_TITLE_LEN {
            debug!(id = %document.id, "rejected: title too short");
            return false;
        }
        if document.abstract_text.len() < MIN_ABSTRACT_LEN {
            debug!(id = %document.id, "rejected: abstract too short");
            return false;
        }
        let ratio = self.keyword_ratio(document);
        if ratio < MIN_KEYWORD_RATIO {
            debug!(id = %document.id, ratio, "rejected: off-topic");
            return false;
        }
        true
    }
}
