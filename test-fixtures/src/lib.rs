//! Shared document builders for integration tests across crates.

use scout_core::models::document::Document;

/// Build a minimal valid document.
pub fn paper(
    id: &str,
    title: &str,
    abstract_text: &str,
    year: Option<i32>,
    citation_count: Option<u64>,
) -> Document {
    let mut doc = Document {
        id: id.to_string(),
        title: title.to_string(),
        abstract_text: abstract_text.to_string(),
        authors: vec!["A. Researcher".to_string()],
        year,
        source: "arxiv".to_string(),
        doi: None,
        url: format!("https://example.org/{id}"),
        citation_count,
        text_hash: String::new(),
    };
    doc.text_hash = doc.compute_text_hash();
    doc
}

/// Ten BCI papers spanning 2015–2024 with citation counts from 0 to 600.
///
/// Exactly one title contains the term "neurofeedback", which reranking
/// tests rely on.
pub fn corpus() -> Vec<Document> {
    let specs: [(&str, &str, i32, u64); 10] = [
        (
            "p01",
            "EEG signal denoising for wearable headsets",
            2015,
            600,
        ),
        ("p02", "Motor imagery decoding with shallow networks", 2016, 420),
        ("p03", "P300 speller calibration under fatigue", 2017, 150),
        ("p04", "SSVEP frequency recognition benchmarks", 2018, 310),
        ("p05", "Dry electrode impedance in long sessions", 2019, 80),
        ("p06", "Neurofeedback training for attention regulation", 2020, 45),
        ("p07", "Cross-subject transfer in EEG classification", 2021, 95),
        ("p08", "Latency budgets for closed-loop stimulation", 2022, 30),
        ("p09", "Self-supervised pretraining on EEG recordings", 2023, 12),
        ("p10", "Foundation models for brain signal decoding", 2024, 0),
    ];

    specs
        .iter()
        .map(|(id, title, year, citations)| {
            paper(
                id,
                title,
                "Electroencephalography study of brain computer interface methods \
                 with signal processing and classification analysis.",
                Some(*year),
                Some(*citations),
            )
        })
        .collect()
}
