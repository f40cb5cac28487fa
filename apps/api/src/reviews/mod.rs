// Review generation: a local, deterministic assembler plus an AI-first writer
// that falls back to it. All AI calls go through llm_client.

pub mod assembler;
pub mod composer;
pub mod handlers;
pub mod length;
pub mod links;
pub mod models;
pub mod phrase_bank;
pub mod prompts;
pub mod selector;
pub mod writer;
