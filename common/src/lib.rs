//! Functions, constants, and whatever else comes along, which are required by
//! more than one of the tools in this crate.
//!
pub mod constants;
pub mod model_file;
pub mod types;
