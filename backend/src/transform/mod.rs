//! Transformation module.
//!
//! This module turns a derived dataset into dashboard views:
//! - Aggregate: group-by, stable sort and top-N primitives
//! - Views: the five dashboard views
//! - Pipeline: load → derive → views, with logging

pub mod aggregate;
pub mod pipeline;
pub mod views;

pub use aggregate::{group_aggregate, sort_descending_by, top_n, AggregateOp};
pub use pipeline::*;
pub use views::*;
