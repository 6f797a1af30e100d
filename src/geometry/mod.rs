//! Geometry utilities for mesh-dual.
//!
//! This module provides the small point arithmetic the area queries and the
//! dual builder need.

pub mod metrics;
