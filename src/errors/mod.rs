//! Error types for scanning and file handling.
//!
//! This module defines:
//!
//! - Error structures carrying a source position
//! - Error kinds for file handling and scan faults
//! - Which kinds end the run and which only skip a file
//! - Tips used when rendering diagnostics

pub mod errors;
