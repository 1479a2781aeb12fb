//! # Marquee
//!
//! A small REST backend for theatrical show listings.
//!
//! The service keeps an in-memory, append-only collection of shows and exposes
//! it over a JSON HTTP API: list all shows, fetch a show by id, and register a
//! new show. There is no persistence; the collection is seeded at startup and
//! discarded when the process exits.
//!
//! ## Architecture
//!
//! - [`models`]: domain types (`Show`, `NewShow`, id newtype)
//! - [`store`]: repository trait and the in-memory implementation
//! - [`http`]: axum-based HTTP server, handlers, and request validation

pub mod http;
pub mod models;
pub mod store;
