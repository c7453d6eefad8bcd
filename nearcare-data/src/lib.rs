//! Data access adapters for the nearcare proximity service.
//!
//! Responsibilities:
//! - Implement the collaborator traits from `nearcare-core` against real
//!   sources: the Nominatim reverse-geocoding API and hospital files on disk.
//! - Encapsulate wire and file formats.
//!
//! Boundaries:
//! - Do not encode ranking rules (they live in `nearcare-core`).
//! - Keep blocking I/O off async executors; HTTP goes through an owned runtime.
//!
//! Invariants:
//! - No global mutable state.

#![forbid(unsafe_code)]

pub mod directory;
pub mod geocode;
