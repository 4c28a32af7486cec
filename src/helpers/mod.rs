//! Helper functions shared across the build pipeline

pub mod date;
pub mod html;
pub mod text;
