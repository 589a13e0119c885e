//! Core resolution logic for Sail Build install scripts.
//!
//! This crate turns the raw query parameters of a script request (project
//! name, PHP version, Laravel version, service list, devcontainer flag) into
//! either a validated [`ResolvedConfig`] ready for template rendering, or a
//! [`ValidationFailure`] carrying the exact user-facing message.
//!
//! # Architecture
//!
//! Everything here is pure computation over two static tables: the
//! PHP/Laravel compatibility matrix and the Sail service catalog (see
//! [`catalog`]). There is no I/O, no shared mutable state, and no async;
//! resolution is safe to run concurrently for unrelated requests.
//!
//! The HTTP layer depends on this crate, never the reverse.

pub mod catalog;

mod errors;
mod resolver;

pub use errors::ValidationFailure;
pub use resolver::{resolve, RawRequest, ResolvedConfig};
