//! JSON handler modules for the façade endpoints.

pub mod command;
pub mod logs;
pub mod predict;
