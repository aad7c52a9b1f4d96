//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories insert directly via SeaORM active models, so tests
//! can construct records in any state, including ones the public API would
//! refuse to create.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let user = factory::user::create_user(&db).await?;
//!
//! // Create a booking with its full dependency chain
//! let (user, owner, turf, booking) =
//!     factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//! // Customize via the builder pattern
//! let booking = factory::booking::BookingFactory::new(&db, turf.id, user.id)
//!     .time_slots(vec!["18:00-19:00".to_string()])
//!     .status(BookingStatus::Confirmed)
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod helpers;
pub mod owner;
pub mod review;
pub mod turf;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use owner::create_owner;
pub use review::create_review;
pub use turf::create_turf;
pub use user::create_user;
