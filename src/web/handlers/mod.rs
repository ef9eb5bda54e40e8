//! HTML template rendering handlers for the Valentine pages.

mod creator;
mod valentine;

pub use creator::{create_page_handler, home_handler};
pub use valentine::{valentine_page_handler, yes_handler};
