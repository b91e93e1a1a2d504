//! Attendance Statistics Engine
//!
//! This crate converts raw daily check-in/check-out records into categorized
//! work hours (early, regular, overtime, night, holiday) and keeps a
//! per-employee monthly aggregate in step with the raw data, recomputing only
//! the employees whose records changed.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
