//! Procterm Core - Platform-independent termination abstractions
//!
//! This crate provides the capability trait and factory trait that are
//! shared across platform-specific terminator implementations.

mod terminator;

pub use terminator::*;
