//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers,
//! the HTML pages and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - The slug registry: validation,
//!   availability, atomic creation, lookup and response recording

pub mod services;
