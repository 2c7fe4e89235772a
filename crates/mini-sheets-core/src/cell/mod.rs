//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellStorage`] - Sparse storage of non-zero cell values

mod address;
mod storage;

pub use address::CellAddress;
pub use storage::CellStorage;
