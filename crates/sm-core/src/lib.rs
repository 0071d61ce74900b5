#![deny(missing_docs)]

//! # sm-core — Identifier Types for Secure Messaging
//!
//! This crate defines the identifier that every other crate in the workspace
//! depends on. It has no internal crate dependencies, only `serde` and
//! `thiserror` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Invalid identifiers are unrepresentable.** [`Urn`] keeps its
//!    components private and is only built through validating constructors.
//!    The type is the enforcement point, not call-site checks.
//!
//! 2. **Explicit legacy compatibility.** Bare user IDs from older clients are
//!    accepted through [`Urn::decode_compat`], a two-branch decoder keyed on
//!    the `urn:` prefix. Anything that claims to be a URN must be one.
//!
//! 3. **[`UrnError`] is the single format error.** Its variants say which
//!    rule failed so the cause stays matchable through wrapping layers.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All operations are pure and safe to call from any thread.

pub mod error;
pub mod urn;

// Re-export primary types at crate root for ergonomic imports.
pub use error::UrnError;
pub use urn::Urn;
