//! Server-rendered Valentine pages.
//!
//! Senders get a landing page and a creation form. Recipients get a themed
//! page asking the question, with a "No" button handled entirely in the
//! browser and a "Yes" form that shows the celebration right away and
//! persists the answer in the background. Uses Askama templates for
//! server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
