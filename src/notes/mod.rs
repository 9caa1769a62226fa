//! Notes system — in-memory note records keyed by integer id.
//!
//! The store is constructed once in `main`, held in `AppState`, and shared
//! with the request handlers. Nothing is persisted; the store lives and dies
//! with the process.

pub mod store;

pub use store::{Note, NoteStore, NoteStoreError};
