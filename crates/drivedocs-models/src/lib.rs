//! Wire and domain types shared across the DriveDocs crates.
//!
//! Everything here is pure data: serde shapes for the platform and document
//! backends, plus the derived context type threaded through the pipeline.

pub mod context;
pub mod document;
pub mod entity;
pub mod session;

pub use context::ResolvedContext;
pub use document::{DatabaseConfig, DriveFile, EulaStatus, ExpiryStatus, FileOwners, FilePreview};
pub use entity::{Device, EntityRef, Group, GroupRef, Trailer, TrailerAttachment, User};
pub use session::{DeviceSelection, SessionInfo};
