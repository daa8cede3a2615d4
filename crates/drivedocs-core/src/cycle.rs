//! Stale-response guard for fetch cycles.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic fetch-cycle generation counter.
///
/// The host fires focus events without cancelling in-flight work; a response
/// belonging to a superseded cycle must not overwrite fresher state. Each
/// refresh begins a new generation and checks its token after every await
/// point that could have been overtaken.
#[derive(Debug, Default)]
pub struct FetchCycle {
    current: AtomicU64,
}

/// Token identifying one fetch generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleToken(u64);

impl FetchCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, superseding all earlier tokens.
    pub fn begin(&self) -> CycleToken {
        CycleToken(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: CycleToken) -> bool {
        self.current.load(Ordering::SeqCst) == token.0
    }
}
