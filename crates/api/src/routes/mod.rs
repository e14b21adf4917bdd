//! Route tables.
//!
//! ```text
//! GET  /                     -> redirect to /catalog
//! GET  /health               -> health
//! /catalog/...               -> catalog::router
//! ```

pub mod catalog;
pub mod health;
