//! Domain model and client-independent logic of the request portal, shared by
//! the backend and the wasm frontend.

pub mod builder;
pub mod catalog;
pub mod gate;
pub mod model;
pub mod requests;
pub mod submission;
