//! The DriveDocs pipeline.
//!
//! One-directional data flow, mirroring the host application's focus cycle:
//! session → context resolver → group flattener → document fetch →
//! association tagger → table engine → render.
//!
//! Remote collaborators come in behind the `Gateway`/`DocStore` traits from
//! `drivedocs-client`; everything downstream of them is pure and
//! synchronous.

pub mod context;
pub mod cycle;
pub mod error;
pub mod eula;
pub mod files;
pub mod table;

pub use context::{flatten_groups, resolve_context};
pub use cycle::{CycleToken, FetchCycle};
pub use error::CoreError;
pub use eula::{EulaDecision, EulaGate};
pub use files::{DocumentService, OwnerView, Snapshot, TaggedFile, resolve_owners, tag_associations};
pub use table::{Column, DEFAULT_PAGE_SIZE, DocumentTable, PAGE_SIZES, expiry_cell_text};
