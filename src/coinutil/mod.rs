//! Utilities consuming coin parameters: exact amounts, fees and the
//! per-user data directory.

pub mod amount;
pub mod app_data;
pub mod fee;
