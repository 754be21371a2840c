//! # Repository Module
//!
//! Database repository implementations for Gerai Tani.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler                                                           │
//! │       │                                                                 │
//! │       │  db.admins().list_active()                                     │
//! │       ▼                                                                 │
//! │  AdminRepository                                                        │
//! │  ├── list_active(&self)                                                │
//! │  ├── record_selection(&self, id, at)   ← single atomic UPDATE          │
//! │  └── insert(&self, admin)                                              │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • SQL is isolated in one place                                        │
//! │  • The Database handle exposes one repository per entity               │
//! │  • Easy to swap for in-memory fakes in tests                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`admin::AdminRepository`] - Roster reads + rotation counter updates
//! - [`product::ProductRepository`] - Product pricing facts
//! - [`settings::SettingsRepository`] - Key-value settings (kill-switch)
//! - [`inquiry::InquiryRepository`] - Append-only inquiries + rate window

pub mod admin;
pub mod inquiry;
pub mod product;
pub mod settings;
