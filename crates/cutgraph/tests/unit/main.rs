//! Unit test suite entry point.

mod session_test;
mod snapshot_test;
