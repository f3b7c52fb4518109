//! VoiceBase speech analytics API SDK for Rust.
//!
//! This crate provides a client for the VoiceBase REST API, exposing its
//! operations grouped by resource:
//!
//! - Media: upload media for analysis, fetch transcripts, analytics,
//!   processing progress, streams and metadata
//! - Definitions: reference data used in processing — keyword groups, custom
//!   vocabularies, searchable fields, predictive models
//! - Profile: manage the API keys of the current account
//!
//! Each call performs exactly one HTTP request and resolves to a single
//! outcome: the parsed response body, or an [`Error`]. A response whose body
//! carries a non-empty `errors` field is treated as a failure even when the
//! HTTP status reports success.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use voicebase::{Client, MediaOptions, MediaSource};
//!
//! #[tokio::main]
//! async fn main() -> voicebase::Result<()> {
//!     let client = Client::builder("your-bearer-token").build()?;
//!
//!     // Upload a file for analysis.
//!     let media = client
//!         .media()
//!         .upload(
//!             MediaSource::File {
//!                 filename: "call.mp3".to_string(),
//!                 data: std::fs::read("call.mp3")?,
//!             },
//!             &MediaOptions::default(),
//!         )
//!         .await?;
//!
//!     // Poll for the transcript once processing finishes.
//!     let media_id = media["mediaId"].as_str().unwrap_or_default();
//!     let transcript = client.media().transcript(media_id, None).await?;
//!     println!("{transcript}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! The builder covers the full configuration surface; only the bearer token
//! is required:
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use voicebase::{API_VERSION_V3, Client};
//!
//! # fn main() -> voicebase::Result<()> {
//! let client = Client::builder("your-bearer-token")
//!     .api_version(API_VERSION_V3)
//!     .connection_timeout(Duration::from_secs(10))
//!     .response_timeout(Duration::from_secs(60))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

mod client;
mod definitions;
mod error;
pub mod http;
mod media;
mod profile;

pub use client::{
    API_VERSION_V3, Client, ClientBuilder, DEFAULT_API_VERSION, DEFAULT_BASE_URL,
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_RESPONSE_TIMEOUT,
};
pub use error::{Error, Result};
pub use http::{DeleteOutcome, HttpClient, RequestSpec};
pub use media::{MediaOptions, MediaService, MediaSource};

pub use definitions::DefinitionsService;
pub use profile::ProfileService;
