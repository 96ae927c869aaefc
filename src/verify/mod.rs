// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index invariants.
//!
//! Debug-mode assertions that panic when the index state drifts out of shape.
//! Zero-cost in release builds, but every test run exercises them because the
//! index checks itself at the end of each mutating call.

pub mod contracts;
