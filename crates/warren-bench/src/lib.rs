//! Benchmarks for the warren map crates.
//!
//! All targets live under `benches/`; this library is intentionally
//! empty.
