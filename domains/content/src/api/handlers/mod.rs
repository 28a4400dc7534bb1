//! API handlers for the Content domain

pub mod brain;
pub mod content;
