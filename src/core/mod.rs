//! Core module tree: decoding, batching, rendering and the quantum backends.

pub mod debug; // gated debug logging (QTREE_DEBUG=1) provides debug_log! macro
pub mod batch;
pub mod decoder;
pub mod error;
pub mod render;
pub mod simulator;
pub mod titan;
