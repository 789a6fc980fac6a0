//! Shared test utilities used across arbor crates.

pub mod proptest_profile;
pub mod tracing;
