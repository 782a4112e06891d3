// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Internationalization for the Atelier portfolio site.
//!
//! Two concerns live here: resolving which of the three site languages a
//! request gets ([`resolve`]) and translating UI strings into it
//! ([`Catalog`]). Both are pure and side-effect free; cookie persistence of
//! the resolved language is the web layer's job.

pub mod catalog;
pub mod resolve;

pub use catalog::Catalog;
pub use resolve::{Resolution, resolve};
