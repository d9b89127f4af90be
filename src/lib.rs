//! physitrack - Client library and CLI for the Physitrack v2 REST API
//!
//! One method per endpoint (clients, programs, exercises, templates, events,
//! messages, PROMs). List endpoints are paginated automatically and every
//! call returns a [`Response`] with keyed access to the JSON payload.
//!
//! # Example
//!
//! ```no_run
//! use physitrack::{ClientBody, Gender, PhysitrackClient};
//!
//! # async fn example() -> physitrack::Result<()> {
//! let client = PhysitrackClient::from_parts("my-api-key", "acme")?;
//!
//! let created = client
//!     .create_client(&ClientBody::new("John", "Trevor", 1990, Gender::Male))
//!     .await?;
//! if !created.succeeded() {
//!     eprintln!("{:?}", created.errors());
//! }
//!
//! let clients = client.get_all_clients().await?;
//! println!("{} clients", clients.records("clients")?.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod ui;

pub use api::{
    ClientBody, CollectionQuery, Credentials, CredentialsResolver, DeliveryChannel, Gender,
    Payload, PhysitrackClient, ProgramAssignment, ProgramExercisesFormat, ProgramUpdate, Response,
};
pub use cli::{Cli, Command, OutputFormat};
pub use error::{PhysitrackError, Result};
