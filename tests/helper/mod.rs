#![allow(dead_code)]

pub mod source;

pub use source::{InMemorySource, create_test_resolver};
