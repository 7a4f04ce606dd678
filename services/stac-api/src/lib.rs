//! STAC API Service Library
//!
//! This crate provides the HTTP server translating STAC/WFS3-style
//! search requests into the CMR metadata catalog's native dialect.

pub mod error;
pub mod handlers;
pub mod state;
