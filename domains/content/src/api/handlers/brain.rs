//! Brain sharing handlers
//!
//! The routes are reserved; both answer 501 until sharing exists.

use axum::extract::Path;
use brain_common::{Error, Result};

/// POST /api/v1/brain/share
pub async fn share_brain() -> Result<()> {
    Err(Error::NotImplemented(
        "Brain sharing is not implemented".to_string(),
    ))
}

/// GET /api/v1/brain/{share_link}
pub async fn get_shared_brain(Path(share_link): Path<String>) -> Result<()> {
    tracing::debug!(share_link = %share_link, "Shared brain requested");
    Err(Error::NotImplemented(
        "Brain sharing is not implemented".to_string(),
    ))
}
