//! Roster API service.
//!
//! Exposes a user directory over REST: list, fetch, create, replace, and
//! delete user records, backed by a store injected at construction.
//!
//! # Configuration
//!
//! See [`config::RosterApiConfig`] for the bind address and public URL
//! options. Passing `--dump-openapi` prints the OpenAPI document instead of
//! serving.

pub mod config;
pub mod server;

pub(crate) mod context;
pub(crate) mod error;
pub(crate) mod handlers;
