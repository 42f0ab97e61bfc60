//! Utility modules for the audit toolkit.

pub mod log;
pub mod report;
