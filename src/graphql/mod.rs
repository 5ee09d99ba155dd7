//! # GraphQL Layer
//!
//! Read-only access to the SpaceX launch API.
//!
//! ## Key Types
//!
//! - [`GraphqlClient`] - Sends fixed query documents, injects the bearer
//!   token, classifies failures
//! - [`Transport`] - Seam between the client and HTTP ([`HttpTransport`]
//!   in production)
//! - [`ApiError`] - Network, unauthorized, GraphQL and parse failures
//!
//! No retries or backoff: a failed request is reported once and the
//! caller decides whether to try again.

mod client;
mod error;
pub mod queries;
mod transport;
mod types;

pub use client::GraphqlClient;
pub use error::{ApiError, ErrorLocation, GraphqlError, TransportError};
pub use transport::{HttpResponse, HttpTransport, Transport};
pub use types::{
    Launch, LaunchData, LaunchOutcome, LaunchVariables, LaunchesData,
    LaunchesVariables, Links, Rocket, RocketInfo, RocketsData,
};
