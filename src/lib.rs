//! Citymap (workspace facade crate).
//!
//! Re-exports the member crates under one name so tests and downstream users
//! can write `citymap::{core, term, ...}`.

pub use citymap_client as client;
pub use citymap_core as core;
pub use citymap_input as input;
pub use citymap_protocol as protocol;
pub use citymap_term as term;
