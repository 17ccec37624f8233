//! Helpers shared across layers

pub mod testing;
