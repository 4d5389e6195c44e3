//! Integration tests for batwatch as a binary.

mod arg_tests;
mod config_creation_tests;
mod invalid_config_tests;
mod util;
