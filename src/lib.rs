pub mod alignment;
pub mod classify;
pub mod error;
pub mod io;
pub mod lang;
pub mod metrics;
pub mod pipelines;
pub mod stopwords;
pub mod substitute;
pub mod tokenizers;
