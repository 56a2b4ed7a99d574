//! Titan: the quantum side of the tree.
//! The circuit description is always available; engines are feature-gated.

pub mod circuit;

// --- Native engine (feature-gated) ---
#[cfg(feature = "quantum")]
pub mod types;

#[cfg(feature = "quantum")]
pub mod gates;

#[cfg(feature = "quantum")]
pub mod engine;

// Python bridges (separate features)
#[cfg(feature = "qiskit")]
pub mod qiskit_bridge;

#[cfg(feature = "qsharp")]
pub mod qsharp_bridge;
