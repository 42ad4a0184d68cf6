//! Unit tests for the account context.

mod token_tests;
