pub mod embedding;
pub mod processor;
pub mod source;

pub use embedding::IEmbeddingProvider;
pub use processor::IDocumentProcessor;
pub use source::IDataSource;
