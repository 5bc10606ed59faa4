//! Client-side integration with the Harvest time tracking API.
//!
//! [`harvest::Harvest`] describes the supported requests, [`wire`] encodes and
//! decodes their payloads and [`client::HarvestClient`] ties both to a
//! [`transport::Transport`].

pub mod client;
pub mod credentials;
pub mod error;
pub mod fixtures;
pub mod harvest;
pub mod models;
pub mod timesheet;
pub mod transport;
pub mod wire;

pub use client::HarvestClient;
pub use credentials::{Credentials, Settings};
pub use error::{DecodeError, HarvestError, HarvestResult, TransportError};
pub use harvest::{Harvest, Method, RequestDescriptor};
