//! Business logic use cases

pub mod welcome;
