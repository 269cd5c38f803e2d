//! Folio: blog content reading, merging, localisation and enhancement.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub(crate) mod util;
