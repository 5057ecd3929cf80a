pub mod average;
pub mod tracing;
