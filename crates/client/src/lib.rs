//! # Stackex Client
//!
//! Client for the Stack Exchange API.
//!
//! This crate contains:
//! - Request execution against the paginated read endpoints
//! - Server-reported throttle enforcement (backoff registry + policies)
//! - Server-error classification
//! - Typed response hydration into `stackex-domain` models
//! - An asynchronous dispatcher mirroring every synchronous operation
//!
//! ## Example
//! ```no_run
//! use stackex_client::{BackoffPolicy, Client, ClientConfig, Parameters};
//!
//! # fn main() -> stackex_client::Result<()> {
//! let client = Client::new(ClientConfig::default())?;
//! let questions = client.fetch_questions(&Parameters::new(), BackoffPolicy::Wait)?;
//! for question in questions.items {
//!     println!("{:?}", question.post.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod backoff;
pub mod client;
pub mod config;
mod dispatch;
pub mod endpoints;
pub mod errors;
mod executor;
pub mod response;
pub mod transport;

// Re-export commonly used items
pub use backoff::{signature, BackoffPolicy, BackoffRegistry};
pub use client::Client;
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL};
pub use errors::{Error, Result};
pub use executor::Parameters;
pub use response::Envelope;
pub use transport::{HttpTransport, Transport};

// Domain models under one roof for downstream callers.
pub use stackex_domain as domain;
