//! Domains module - business logic organized by bounded contexts.
//!
//! Each domain is self-contained with its own errors, definitions, and
//! registration logic.

pub mod tools;
