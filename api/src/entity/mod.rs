//! SeaORM entities
//!
//! Table models for the persisted layout. Domain code works with
//! `domain::entities` and never touches these directly.

pub mod shipments;
