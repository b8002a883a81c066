//! Unit tests for graphband.

mod force_tests;
