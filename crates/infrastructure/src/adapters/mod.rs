//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod gemini_inference_adapter;
mod in_memory_session_store;

pub use gemini_inference_adapter::GeminiInferenceAdapter;
pub use in_memory_session_store::InMemorySessionStore;
