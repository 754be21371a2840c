//! # gerai-db: Database Layer for Gerai Tani
//!
//! This crate provides database access for the Gerai Tani lead-routing
//! service. It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Gerai Tani Data Flow                               │
//! │                                                                         │
//! │  HTTP handler (resolve_sales_channel)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     gerai-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (admin.rs,   │    │  (embedded)  │  │   │
//! │  │   │               │    │   product.rs, │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│   settings.rs,│    │ 001_initial_ │  │   │
//! │  │   │ Connection    │    │   inquiry.rs) │    │ schema.sql   │  │   │
//! │  │   │ Management    │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (WAL mode, foreign keys on)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (admin, product, ...)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gerai_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./data/gerai.db")).await?;
//! let roster = db.admins().list_active().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::admin::AdminRepository;
pub use repository::inquiry::InquiryRepository;
pub use repository::product::ProductRepository;
pub use repository::settings::SettingsRepository;
