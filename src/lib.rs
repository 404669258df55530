//! DocuVault - Client Library
//!
//! Client-side core of the DocuVault document management system:
//! authorization evaluator, session store, REST API client and the
//! headless logic behind each screen.

pub mod api;
pub mod authz;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod session;
pub mod telemetry;
pub mod views;

pub use config::ClientConfig;
pub use error::{AppError, Result};
