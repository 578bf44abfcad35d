//! Integration tests for Layer 3: Engine
//!
//! Tests for command dispatch, failure policies, and catalog output.
