// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the agenda-core crate.
//!
//! These tests validate multi-step workflows that integrate the store, the
//! cursor, persistence and configuration.

mod config_driven;
mod event_lifecycle;
mod navigation;
