//! Shared helpers used across the pipeline

pub mod paths;
