//! Domain contract for the Rolodex contact manager.
//!
//! Everything the server and the client must agree on lives here: contact
//! field validation rules, the pagination contract, and the shared error
//! type. The crate has no I/O so both sides can depend on it without
//! pulling in the other's stack.

pub mod contact;
pub mod error;
pub mod pagination;
pub mod types;
