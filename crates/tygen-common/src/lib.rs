//! Common constants for the tygen resolver crates.
//!
//! This crate provides the centralized limits and thresholds shared by the
//! resolver. Keeping them in one place prevents duplicate definitions with
//! inconsistent values and documents the rationale for each limit.

// Centralized limits and thresholds
pub mod limits;
