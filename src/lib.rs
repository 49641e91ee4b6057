//! Resolve the on-disk locations of installed components.
//!
//! See [`Locator`] for the two resolution strategies.

pub mod fs_op;
pub mod ini;
pub mod locator;

pub use crate::fs_op::PathType;
pub use crate::ini::{IniError, IniFile, IniSection};
pub use crate::locator::{Layout, Locator, LocatorError};
