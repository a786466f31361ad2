//! Static data tables

pub mod commands;

pub use commands::MATH_COMMANDS;
