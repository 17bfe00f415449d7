//! Client library for the Rolodex contact manager.
//!
//! Talks to the API server over HTTP and keeps a local, optimistically
//! updated view of one page of contacts. Validation and pagination rules
//! come from `rolodex-core`, so the client enforces exactly what the
//! server enforces.

pub mod api;
pub mod book;
pub mod view;
