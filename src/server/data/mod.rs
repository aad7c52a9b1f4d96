//! Database repository layer for all domain entities.
//!
//! Repository structs wrap the SeaORM queries for one entity each. They are
//! generic over `ConnectionTrait` so the same repository runs against the
//! pooled connection or inside a transaction (the availability engine needs
//! the latter for its read-check-write sequence).

pub mod booking;
pub mod owner;
pub mod review;
pub mod turf;
pub mod user;

#[cfg(test)]
mod test;
