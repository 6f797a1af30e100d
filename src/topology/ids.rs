//! Strong, zero-cost index handles for surface mesh elements.
//!
//! Vertices, edges and faces live in externally owned arenas and are
//! referred to by their position in those arenas. Wrapping the raw `usize`
//! in a distinct type per element kind keeps a face index from being passed
//! where a vertex index is expected, while keeping the memory layout of a
//! bare `usize`.

use std::fmt;

macro_rules! index_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Copy,
            Clone,
            Default,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[repr(transparent)]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Wraps a raw arena index.
            #[inline]
            pub const fn new(raw: usize) -> Self {
                $name(raw)
            }

            /// Returns the raw arena index.
            #[inline]
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(raw: usize) -> Self {
                $name(raw)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(id: $name) -> usize {
                id.0
            }
        }

        /// Displays as `Name(raw_value)`.
        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        /// Prints only the raw integer.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

index_handle!(
    /// Index of a vertex.
    VertId
);
index_handle!(
    /// Index of an (undirected) edge.
    EdgeId
);
index_handle!(
    /// Index of a face.
    FaceId
);
