// Code generation: prompt building, provider call, response extraction.
// All provider calls go through llm_client::TextGenerator.

pub mod extractor;
pub mod generator;
pub mod handlers;
pub mod prompts;
