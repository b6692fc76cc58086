//! HTTP request handlers
//!
//! - `api` - Health check endpoint
//! - `recorder` - Static in-browser recorder page
//! - `transcribe` - Audio transcription relay endpoint

pub mod api;
pub mod recorder;
pub mod transcribe;

pub use transcribe::transcribe_handler;
