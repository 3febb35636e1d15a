//! Configuration constants
//!
//! Fixed names and environment variables of the build layout.

pub mod defaults;
