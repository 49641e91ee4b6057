//! Filesystem queries used while resolving locations.
//!
//! Only metadata is read here; nothing is created or modified.

pub mod stat;

pub use stat::{exists, PathType};
