//! Search Service Module
//!
//! The core component responsible for executing directory queries against
//! the loaded lab catalog.
//!
//! ## Overview
//! This module implements the search pipeline for the lab directory. It
//! bridges the HTTP API layer with the in-memory `LabStore`.
//!
//! Data flows one way per request:
//! parse/clamp parameters -> filter (free text, state, city, discipline) ->
//! sort -> paginate -> assemble the cleaned response. Facet lists are
//! aggregated independently of the text and discipline filters; only the
//! selected state narrows the city list.
//!
//! ## Submodules
//! - **`engine`**: Filtering, sorting, pagination, and response assembly.
//! - **`facets`**: The facet lists that drive the client filter UI.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Request/response shapes for API communication.

pub mod engine;
pub mod facets;
pub mod handlers;
pub mod types;
