//! AssemblyAI batch Speech-to-Text integration.
//!
//! This module provides a client for AssemblyAI's pre-recorded audio API:
//!
//! - Raw audio upload (`/v2/upload`) returning a temporary URL
//! - Transcript job creation (`/v2/transcript`) and status polling
//! - Regional endpoints (US, EU) and base URL override
//!
//! # Architecture
//!
//! - [`config`]: Configuration types (`AssemblyAIConfig`, `AssemblyAIRegion`)
//! - [`messages`]: REST message types
//! - [`client`]: The `AssemblyAIClient` implementing [`TranscriptionProvider`]
//!
//! # Example
//!
//! ```rust,no_run
//! use transcribe_relay::core::stt::{AssemblyAIClient, AssemblyAIConfig, AudioPayload, TranscriptionProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AssemblyAIClient::new(AssemblyAIConfig::new("your-assemblyai-api-key"))?;
//!
//!     let audio = std::fs::read("clip.webm")?;
//!     let reference = client.upload(AudioPayload::from(audio)).await?;
//!     let text = client.transcribe(reference).await?;
//!     println!("Transcript: {text}");
//!
//!     Ok(())
//! }
//! ```
//!
//! [`TranscriptionProvider`]: crate::core::stt::TranscriptionProvider

mod client;
pub mod config;
pub mod messages;

#[cfg(test)]
mod tests;

pub use client::AssemblyAIClient;
pub use config::{AssemblyAIConfig, AssemblyAIRegion, DEFAULT_POLL_INTERVAL};
pub use messages::{TranscriptResponse, TranscriptStatus, UploadResponse};
