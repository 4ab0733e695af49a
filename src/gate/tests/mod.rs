//! Unit tests for the gate bounded context.

mod collector_tests;
mod fixtures;
mod reporter_tests;
