//! Same Game Gravity (workspace facade crate).
//!
//! This package keeps the `same_gravity::{core,types}` public API stable
//! while the implementation lives in dedicated crates under `crates/`.

pub use same_gravity_core as core;
pub use same_gravity_types as types;
