//! Utility functions shared across layers.
//!
//! - [`slug`] - Slug validation rules
//! - [`db_error`] - Database error classification
//! - [`url_builder`] - Public URL construction for links

pub mod db_error;
pub mod slug;
pub mod url_builder;
