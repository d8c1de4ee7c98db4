//! Tenpin (workspace facade crate).
//!
//! This package keeps a stable `tenpin::{core,input,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tenpin_core as core;
pub use tenpin_input as input;
pub use tenpin_term as term;
pub use tenpin_types as types;
