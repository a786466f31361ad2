//! Utility modules
//!
//! - Error types and result types
//! - Pipeline run reports

pub mod error;
pub mod report;

pub use error::{Error, Result};
pub use report::{RenderReport, RepairKind};
