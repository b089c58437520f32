// tests/common/mod.rs

#![allow(dead_code, unused_imports)]

pub use depwatch_test_utils::{builders, init_tracing, recording, with_timeout};
