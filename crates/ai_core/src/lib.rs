//! AI Core - Text generation client
//!
//! Provides the inference port and a client for Google's Generative Language
//! `generateContent` REST API, used as a plain text-completion oracle.

pub mod config;
pub mod error;
pub mod gemini;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use gemini::GeminiInferenceEngine;
pub use ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage};
