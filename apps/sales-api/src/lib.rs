//! # Gerai Sales API
//!
//! HTTP server for the Gerai Tani lead-routing engine.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          HTTP Surface                                   │
//! │                                                                         │
//! │  GET  /health                     liveness + database health            │
//! │  GET  /api/sales/resolve          route a lead to a sales admin         │
//! │       ?productId=..&channel=wa    (wa | shopee | tokopedia)             │
//! │  GET  /api/products/:id/price     tiered price quote  (?qty=N)          │
//! │  POST /api/inquiries              append-only inquiry intake,           │
//! │                                   per-IP sliding-window rate limit      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HTTP_PORT` - listen port (default: 8080)
//! - `DATABASE_PATH` - SQLite file path (default: ./data/gerai.db)
//! - `INQUIRY_RATE_LIMIT` - inquiries per IP per window (default: 5)
//! - `INQUIRY_RATE_WINDOW_SECS` - window length (default: 600)

pub mod config;
pub mod error;
pub mod routes;
pub mod service;
pub mod state;

// Re-exports
pub use config::Config;
pub use error::ApiError;
pub use state::AppState;
