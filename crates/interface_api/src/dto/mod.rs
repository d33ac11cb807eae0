//! Request/response data transfer objects
//!
//! Responses reuse the domain view types directly; only requests get
//! dedicated DTOs with validation.

pub mod auth;
pub mod billing;
pub mod member;
pub mod roster;
