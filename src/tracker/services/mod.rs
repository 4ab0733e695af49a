//! Application services for card status resolution.

mod resolver;

pub use resolver::{CardResolver, RetryPolicy};
