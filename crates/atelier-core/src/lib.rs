// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Atelier portfolio site.
//!
//! This crate provides the error type and the shared domain types used
//! throughout the Atelier workspace: the persisted [`Item`], its write-side
//! [`ItemDraft`], and the [`Language`] enum the locale layer resolves.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::AtelierError;
pub use types::{Item, ItemDraft, Language};
