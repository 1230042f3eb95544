//! # Repository Implementations
//!
//! One repository per entity family, each holding a cloned pool handle:
//!
//! - [`catalog`] - companies, car types and cars (reads + seeding writes)
//! - [`pricing`] - daily price point lookups
//! - [`reservation`] - transactional confirmation writes and renter history

pub mod catalog;
pub mod pricing;
pub mod reservation;
