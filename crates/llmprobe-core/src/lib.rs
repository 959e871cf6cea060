//! # llmprobe Core Library
//!
//! This crate provides the diagnostic logic for the `llmprobe` CLI. It checks
//! that an OpenAI-compatible chat endpoint is reachable and behaving: a basic
//! completion, a conversation-analysis completion, and the model listing.
//!
//! ## Modules
//!
//! - `client`: HTTP client for the chat-completion and model-listing routes
//! - `checks`: the three diagnostic checks
//! - `report`: console output and the pass/fail tally
//! - `settings`: endpoint and credential configuration

pub mod checks;
pub mod client;
pub mod report;
pub mod settings;
