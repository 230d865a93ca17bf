//! Models for the explorer and node APIs.

pub mod common;
pub mod explorer;
pub mod node;

pub use common::*;
pub use explorer::*;
pub use node::*;
