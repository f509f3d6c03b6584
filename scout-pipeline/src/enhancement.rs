//! Query enhancement for source dispatch.
//!
//! Source APIs answer generic queries ("attention", "feedback") with a
//! flood of off-topic results. Queries that carry no domain-indicating
//! term get a qualifying suffix before dispatch; already-specific queries
//! go out untouched.

/// Terms that mark a query as already domain-specific. Also the keyword
/// set the document validator measures relevance against.
pub(crate) const DOMAIN_VOCABULARY: &[&str] = &[
    "brain",
    "computer",
    "interface",
    "bci",
    "eeg",
    "electroencephalography",
    "neural",
    "neurotechnology",
    "ssvep",
    "p300",
    "motor",
    "imagery",
    "prosthesis",
    "neuroprosthesis",
    "brain-machine",
    "brain-computer",
    "cortical",
    "signal",
    "processing",
    "classification",
    "decoding",
    "encoding",
    "stimulation",
    "feedback",
    "neurofeedback",
    "control",
];

/// Suffix appended to under-specified queries.
const DOMAIN_CONTEXT: &str = "brain-computer interface";

/// Whether any token of the query is in the domain vocabulary.
pub fn is_domain_specific(query: &str) -> bool {
    query
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric() && c != '-'))
        .any(|t| DOMAIN_VOCABULARY.contains(&t.to_lowercase().as_str()))
}

/// The query as dispatched to sources.
pub fn enhance(query: &str) -> String {
    let trimmed = query.trim();
    if trimmed.is_empty() || is_domain_specific(trimmed) {
        trimmed.to_string()
    } else {
        format!("{trimmed} {DOMAIN_CONTEXT}")
    }
}
