//! An immutable, balanced k-d tree over points of interest.
//!
//! The tree is built once from an owned list of POIs and never mutated
//! afterwards; queries take `&self` only, so a built tree can be shared
//! across threads without locking.

#![warn(missing_docs)]

mod builder;
mod index;
mod nearest;
mod query;

pub use builder::KdTreeBuilder;
pub use index::PoiKdTree;

#[cfg(test)]
mod test;
