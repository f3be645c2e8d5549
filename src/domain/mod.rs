//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (share value object, errors)
//! - `split` - Pure fare allocation and its text summary

pub mod foundation;
pub mod split;
