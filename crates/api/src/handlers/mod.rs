//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `birthday_db` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod admin;
pub mod auth;
pub mod birthday;
pub mod congratulation;
pub mod photo;
pub mod tags;
