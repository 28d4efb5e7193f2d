//! Application services layer.

pub mod digest;
pub mod error;
pub mod interleave;
pub mod payload;
pub mod repos;
pub mod transform;
