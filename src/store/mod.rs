//! Pet Store Module
//!
//! The in-memory collection of pets and the identifier counter that names them.
//!
//! ## Core Concepts
//! - **Ownership**: `PetStore` is the only owner of the collection. It is built once at
//!   startup and shared as an `Arc<PetStore>` with the HTTP layer.
//! - **Identifiers**: Ids are handed out from a counter that starts at 1000 and only grows,
//!   so an id is never reused, even after the pet is deleted.
//! - **Locking**: A single exclusive lock guards both the collection and the counter. Reads
//!   and writes are serialized alike.
//!
//! The store performs no input validation and never logs; both are the caller's job.

pub mod error;
pub mod memory;
pub mod types;
