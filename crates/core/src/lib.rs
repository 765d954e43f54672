//! Domain logic for the birthday tracker.
//!
//! No I/O. Date rules take "today" as an argument; only the `validator`
//! adapter in [`birthday`] reads the clock.

pub mod age;
pub mod birthday;
pub mod congratulation;
pub mod countdown;
pub mod error;
pub mod pagination;
pub mod photo;
pub mod roles;
pub mod types;
