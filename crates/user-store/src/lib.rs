//! In-memory user store.
//!
//! Provides the `UserRepository` contract and its in-memory implementation
//! over the `domain` crate's `User` entity. Single-threaded and synchronous:
//! every operation returns or fails within the same call.

pub mod repository;

pub use repository::{MemoryUserStore, UserRepository};
