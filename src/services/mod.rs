pub mod llm;
pub mod transcript;
