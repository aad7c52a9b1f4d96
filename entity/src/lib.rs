//! SeaORM entity definitions for the turf booking database.
//!
//! One module per table. JSON-backed column wrappers live in `types`.

pub mod booking;
pub mod review;
pub mod turf;
pub mod turf_owner;
pub mod types;
pub mod user;

pub mod prelude {
    pub use super::booking::Entity as Booking;
    pub use super::review::Entity as Review;
    pub use super::turf::Entity as Turf;
    pub use super::turf_owner::Entity as TurfOwner;
    pub use super::user::Entity as User;
}
