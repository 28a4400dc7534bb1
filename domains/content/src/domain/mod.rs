//! Domain layer for Content

pub mod entities;
