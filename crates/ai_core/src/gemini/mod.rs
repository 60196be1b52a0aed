//! Google Generative Language (Gemini) inference engine
//!
//! Talks to the `models/{model}:generateContent` REST endpoint.

mod client;
mod wire;

pub use client::GeminiInferenceEngine;
