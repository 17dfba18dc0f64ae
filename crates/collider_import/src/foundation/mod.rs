//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the importer:
//! - Math types and operations
//! - Arena handles for hierarchy storage
//! - Logging utilities

pub mod math;
pub mod collections;
pub mod logging;
