//! Content domain: saved links and brain-share routes

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
// Re-export repository types
pub use repository::{ContentStore, MockContentStore, PgContentStore};

// Re-export API types
pub use api::routes;
pub use api::ContentState;
