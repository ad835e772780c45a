//! Common test utilities for linint.
//!
//! This module provides shared fixtures and assertions for the integration tests.
#![allow(dead_code)]

pub mod assertions;
#[cfg(feature = "netcdf")]
pub mod test_data;
