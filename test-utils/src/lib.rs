//! Turfbook Test Utils
//!
//! Shared testing utilities for the turfbook backend. This crate offers a
//! builder pattern for creating test contexts with in-memory SQLite
//! databases, plus factories that insert domain entities with sensible
//! defaults.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database
//! tables, then the factories to populate it:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_booking_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_booking_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     let (user, owner, turf, booking) =
//!         factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
