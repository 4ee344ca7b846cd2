//! HTTP transport for Registrar
//!
//! This crate provides the reqwest-backed implementation of
//! [`registrar::LegalApiTransport`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use registrar::FilingApiFacade;
//! use registrar_http::{HttpTransport, HttpTransportConfig};
//!
//! let config = HttpTransportConfig::new("https://legal-api.example/api/v2");
//! let api = FilingApiFacade::new(Arc::new(HttpTransport::new(config)?));
//! ```

mod client;
mod config;

pub use client::HttpTransport;
pub use config::HttpTransportConfig;
