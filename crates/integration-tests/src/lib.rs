//! End-to-end tests for the caffeine host live in `tests/`
