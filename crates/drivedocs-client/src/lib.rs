//! Remote collaborators for the DriveDocs pipeline.
//!
//! Two seams, each a trait with a reqwest-backed implementation:
//!
//! - [`Gateway`]: the host platform's typed entity API, batched through a
//!   single `multi_call` per round trip.
//! - [`DocStore`]: the document backend (file listing, file read/open, EULA
//!   check/accept, per-database config).
//!
//! Tests and the core crate substitute in-memory fakes for either trait.

mod error;
mod gateway;
mod store;

pub use error::{ClientError, Result};
pub use gateway::{EntityQuery, Gateway, HttpGateway, entities, first_entity};
pub use store::{DEFAULT_DOCS_BASE_URL, DocStore, HttpDocStore, infer_content_type};
