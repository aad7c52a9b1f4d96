//! Wire DTOs for the HTTP API.
//!
//! Request payloads carry `validator` annotations and are validated in the
//! controllers before they reach domain logic; response DTOs are built from
//! entity models and never expose credential hashes.

pub mod api;
pub mod booking;
pub mod owner;
pub mod review;
pub mod turf;
pub mod user;
