//! Integration test utilities for the sidebar
//!
//! This crate provides an in-memory store and helpers for running the whole
//! display list pipeline and permission gating end to end.

pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
