//! Application services: enhancement, source reading, merging, localisation.

pub mod blog;
pub mod catalog;
pub mod enhance;
pub mod error;
pub mod merge;
pub mod overlay;
pub mod repos;
pub mod source;
