//! Domain types shared by the movies store adapter and HTTP layer.

pub mod error;
pub mod types;
