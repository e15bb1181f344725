//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Test application fixture (in-memory database, static dir, TestServer)
//! - Authentication test helpers
//! - Custom assertion macros

#![allow(dead_code)]

#[cfg(feature = "ssr")]
pub mod auth_helpers;
#[cfg(feature = "ssr")]
pub mod database;

#[cfg(feature = "ssr")]
pub use auth_helpers::*;
#[cfg(feature = "ssr")]
pub use database::*;
