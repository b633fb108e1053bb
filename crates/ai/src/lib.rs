//! Generative-model client and prompt flows.
//!
//! Wraps an OpenAI-compatible chat-completions API behind the
//! [`GenerativeModel`] trait and builds the three CampusLink flows on top of
//! it: lost-item matching, marketplace description generation, and
//! tag/category suggestion. The flows enforce only the response *shape*;
//! all matching judgment lives in the external model.

pub mod client;
pub mod description;
pub mod error;
pub mod matching;
pub mod response;
pub mod suggest;

pub use client::{ChatModelClient, GenerativeModel};
pub use error::AiError;
