//! Test suite for the task context.

mod service_tests;
