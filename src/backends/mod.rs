//! Inference server backends implementing [`crate::generation::GenerationProvider`].

pub mod ollama;
