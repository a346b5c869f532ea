//! # fleet-core
//!
//! Core types and error types for fleetdeck.
//!
//! This crate provides the foundational types shared across all fleetdeck crates:
//! - Entity structs for directory records and validated operator reports
//! - Status enums with state machine transitions
//! - Cross-cutting error types
//! - Submission event envelope handed to the persistence layer
//! - Backend and CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod events;
pub mod responses;
