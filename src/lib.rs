#![doc = include_str!("../README.md")]

mod error;

pub mod distance;
pub mod filter;
pub mod kdtree;
pub mod loader;
pub mod poi;

pub use error::{PoiIndexError, Result};
pub use filter::PoiFilter;
pub use poi::Poi;

#[cfg(test)]
pub(crate) mod test;
