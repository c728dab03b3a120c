//! Common - Shared Types and Utilities for the Treasury Allocator Contracts
//!
//! This package provides shared type definitions and utility functions
//! used across the allocator smart contracts.

pub mod asset;

pub use asset::{Asset, AssetInfo};
