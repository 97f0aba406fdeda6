//! HTTP client library for the Wartezeiten.APP / Waitingtimes.APP API.
//!
//! This crate provides a typed async client for the three read-only endpoints
//! of the theme park wait-time service: parks, opening times and waiting times.
//! Request parameters travel as HTTP headers; responses are JSON arrays mapped
//! onto typed records.
//!
//! # Example
//!
//! ```no_run
//! use wartezeiten_client::{ClientConfig, Language, WaitingTimesRequest, WartezeitenClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), wartezeiten_client::Error> {
//!     let client = WartezeitenClient::new(ClientConfig::default())?;
//!
//!     let request = WaitingTimesRequest::new("efteling", Language::En);
//!     for ride in client.get_waiting_times(&request).await? {
//!         println!("{}: {} min ({})", ride.name, ride.waitingtime, ride.status);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod error;
mod types;

pub use api::WartezeitenApi;
pub use client::{ClientConfig, DEFAULT_BASE_URL, WartezeitenClient};
pub use error::Error;
pub use types::*;
