//! Self-checks for derived adjacency tables.
//!
//! Checks run in debug builds, or in release builds with the
//! `strict-invariants` / `check-invariants` features.

use crate::mesh_error::MeshError;

/// Consistency checks between a mesh's cached incidence lists.
pub trait DebugInvariants {
    /// Panic on the first broken invariant when checking is enabled.
    fn debug_assert_invariants(&self);
    /// Report the first broken invariant as [`MeshError::InvariantViolation`].
    fn validate_invariants(&self) -> Result<(), MeshError>;
}

/// Run a fallible invariant check and panic with `ctx` on failure.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
