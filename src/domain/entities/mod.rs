//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A persisted Valentine link keyed by its slug
//! - [`Theme`] - Visual theme chosen at creation time
//! - [`ResponseChoice`] - The recipient's answer on the Valentine page
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewLink`] carries only the caller-supplied fields; the store assigns `id`,
//! `created_at` and the initial `responded_yes = false`.

pub mod link;
pub mod theme;

pub use link::{Link, LinkCounts, LinkStatus, NewLink, ResponseChoice};
pub use theme::{Theme, UnknownTheme};
