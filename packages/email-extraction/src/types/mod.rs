//! Data types shared by the pipeline and its callers.

pub mod config;
pub mod extraction;
