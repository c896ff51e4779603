//! Edge Cases and Error Handling Tests
//!
//! Tests for unusual inputs and soft failures:
//! - Unsupported extensions and empty files
//! - Syntax errors in the in-process parser
//! - Missing, failing and misbehaving companion parsers
//! - Unicode content and untrusted spans

pub mod error_handling_tests;
