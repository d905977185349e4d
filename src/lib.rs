//! albumstore - An in-memory album catalogue served over HTTP
//!
//! The [`album`] module owns the record store and body validation, the
//! [`http_server`] module maps routes onto store operations, and [`cli`]
//! wires configuration, logging and the server together.

pub mod album;
pub mod cli;
pub mod http_server;
