mod owners;
mod service;
mod tagger;

pub use owners::{OwnerView, resolve_owners};
pub use service::{DocumentService, Snapshot, TaggedFile};
pub use tagger::tag_associations;
