// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request handlers, split by surface.

pub mod admin;
pub mod public;
