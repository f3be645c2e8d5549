//! Taxi Split - Shared fare splitting service
//!
//! This crate splits a shared expense among 2 to 10 participants, either
//! proportionally to a per-participant value or equally, and rounds every
//! payment to whole currency units so that the payments add up exactly to
//! the rounded total.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;
