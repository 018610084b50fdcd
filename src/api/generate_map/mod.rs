// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Lash map API endpoint module
//!
//! Provides POST /generate-map. The map is currently a fixed, language
//! dependent text; the photo is validated but not analysed.

pub mod handler;
pub mod placeholder;

pub use handler::{generate_map_handler, GenerateMapResponse};
pub use placeholder::placeholder_map;
