// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage model types.
//!
//! The row types live in `atelier-core` so the web layer can use them
//! without depending on the storage crate; this module re-exports them for
//! the query modules.

pub use atelier_core::{Item, ItemDraft};
