//! Library side of the `addrnorm` CLI: the logging bootstrap and the
//! per-file normalization pipeline, kept here so integration tests can
//! drive the pipeline directly.

pub mod logging;
pub mod pipeline;
