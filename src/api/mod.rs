//! Physitrack API client module
//!
//! This module provides functionality to interact with the Physitrack v2 API.

mod client;
pub mod clients;
mod credentials;
pub mod events;
pub mod exercises;
pub mod messages;
mod pagination;
pub mod programs;
pub mod proms;
mod response;
pub mod templates;

use std::borrow::Cow;

pub use client::PhysitrackClient;
pub use clients::{ClientBody, Gender};
pub use credentials::{Credentials, CredentialsResolver};
pub use pagination::{is_full_page, CollectionQuery};
pub use programs::{DeliveryChannel, ProgramAssignment, ProgramExercisesFormat, ProgramUpdate};
pub use response::{Payload, Response};

/// Percent-encode one path segment (ids, access codes)
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}
