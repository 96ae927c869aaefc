// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by the matcher and the store layer.
//!
//! Text normalization for accent-insensitive search, and the slug rule that
//! turns a store title into its id.

pub mod normalize;

pub use normalize::{normalize, slugify};
