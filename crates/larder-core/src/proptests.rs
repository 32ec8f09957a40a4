//! Property-based tests for conversion, rounding and consolidation.
