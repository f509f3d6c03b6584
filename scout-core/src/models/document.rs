use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A literature document, validated at the collaborator boundary.
///
/// Identity is `id`, but two documents whose normalized titles are equal
/// are considered duplicates regardless of id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Stable unique identifier (source-assigned, or a fresh UUID).
    pub id: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub authors: Vec<String>,
    /// Publication year, when the source reports one.
    #[serde(default)]
    pub year: Option<i32>,
    /// Originating source identifier, e.g. "arxiv".
    pub source: String,
    #[serde(default)]
    pub doi: Option<String>,
    pub url: String,
    #[serde(default)]
    pub citation_count: Option<u64>,
    /// blake3 hex of `title + " " + abstract`, for fast duplicate detection.
    #[serde(default)]
    pub text_hash: String,
}

impl Document {
    /// The text that gets embedded: title and abstract joined by a space.
    pub fn embedding_text(&self) -> String {
        format!("{} {}", self.title, self.abstract_text)
            .trim()
            .to_string()
    }

    /// Trimmed, lowercased title — the duplicate-detection key.
    pub fn normalized_title(&self) -> String {
        self.title.trim().to_lowercase()
    }

    /// Content hash over the embedding text.
    pub fn compute_text_hash(&self) -> String {
        blake3::hash(self.embedding_text().as_bytes())
            .to_hex()
            .to_string()
    }

    /// Look up a metadata field by name for filter evaluation.
    ///
    /// Returns `None` for unknown fields and for optional fields that are
    /// unset; a filtered document missing the field is excluded.
    pub fn field_value(&self, key: &str) -> Option<Value> {
        match key {
            "id" => Some(Value::from(self.id.clone())),
            "title" => Some(Value::from(self.title.clone())),
            "source" => Some(Value::from(self.source.clone())),
            "url" => Some(Value::from(self.url.clone())),
            "doi" => self.doi.clone().map(Value::from),
            "year" => self.year.map(Value::from),
            "citation_count" => self.citation_count.map(Value::from),
            _ => None,
        }
    }
}

/// A raw nearest-neighbor hit from the vector index.
///
/// `distance` is squared Euclidean — lower is more similar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub document: Document,
    pub distance: f32,
}

/// A hit after composite reranking. Lower `composite` is better.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub document: Document,
    /// Raw index distance carried through from the search stage.
    pub distance: f32,
    pub composite: f64,
}
