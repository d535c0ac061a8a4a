//! In-memory ordered index using a red-black tree. Entries are kept in key
//! order with no duplicates, supporting point lookup, range and threshold
//! queries, with logarithmic worst-case cost for every write.

mod config;
mod depth;
mod error;
mod node;
mod rbt;

pub use crate::config::{Config, GteMode};
pub use crate::depth::Depth;
pub use crate::error::RbtError;
pub use crate::rbt::{Rbt, Stats};

#[cfg(test)]
mod rbt_test;
