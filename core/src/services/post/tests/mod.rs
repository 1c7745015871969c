//! Tests for post service
