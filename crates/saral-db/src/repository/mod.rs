//! # Repository Module
//!
//! Database repository implementations for the Saral POS bill store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Caller                                                                │
//! │       │                                                                 │
//! │       │  db.bills().get_by_id(42)                                      │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  BillRepository                                                        │
//! │  ├── create(&self, payload)                                            │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── filter(&self, filter)                                             │
//! │  ├── cleanup(&self, retention_days)                                    │
//! │  └── sum_total(&self, filter)                                          │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • Easy to test against an in-memory database                          │
//! │  • SQL is isolated in one place                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`bill::BillRepository`] - Bill and bill item operations

pub mod bill;
