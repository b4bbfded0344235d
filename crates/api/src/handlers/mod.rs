//! HTTP handlers, one module per resource.

pub mod auth;
pub mod dashboard;
pub mod distribution;
pub mod project;
pub mod staff;
