//! Business logic layer.
//!
//! `availability` owns the booking/free-slot model and is the only place
//! bookings are created or transitioned; `auth` covers credential hashing
//! and bearer-token issuance.

pub mod auth;
pub mod availability;

#[cfg(test)]
mod test;
