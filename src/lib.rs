//! In-memory conversation history: append-only message logs keyed by
//! conversation id, with recent-window reads and per-user listing.

pub mod application;
pub mod domain;
pub mod infrastructure;
