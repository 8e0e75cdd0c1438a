//! Common utilities for integration tests
//!
//! Import items through their module (`common::mock_models::ProductModel`,
//! `common::test_helpers::small_request`). Each test binary compiles this
//! module but uses a different subset of it.

#![allow(dead_code)]

pub mod mock_models;
pub mod test_helpers;
