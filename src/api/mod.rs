// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod analyze;
pub mod errors;
pub mod generate_map;
pub mod http_server;
pub mod upload;

pub use analyze::analyze_handler;
pub use errors::{ApiError, ErrorResponse};
pub use generate_map::{generate_map_handler, GenerateMapResponse};
pub use http_server::{create_app, start_server, AppState};
pub use upload::{read_upload_form, UploadForm};
