//! Core trait abstractions at the network seams of the pipeline.

pub mod fetcher;
pub mod searcher;
