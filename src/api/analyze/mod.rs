// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Lash analysis API endpoint module
//!
//! Provides POST /analyze for classifying a lash photo and returning a report.

pub mod handler;

pub use handler::analyze_handler;
