//! Lab Directory Search Service
//!
//! Backend for the accredited-laboratory directory of a chemical
//! quality-assurance consultancy website. Serves the lab search API
//! (filtering, facets, sorting, pagination) over a dataset loaded once at
//! startup, plus the lead-capture form endpoints.
//!
//! ## Architecture Modules
//! The service is composed of three subsystems:
//!
//! - **`catalog`**: The immutable lab dataset. Record types, field cleaning,
//!   the discipline taxonomy, and the `LabStore` that loads the source JSON
//!   file once and precomputes the derived data every request reads.
//! - **`search`**: The query pipeline. Parses and clamps request parameters,
//!   filters records (free text, state, city, discipline), aggregates facet
//!   lists, sorts, paginates, and assembles the cleaned response payload.
//! - **`contact`**: The lead-capture endpoints. Validates contact and
//!   sample-report submissions and acknowledges them with a reference id.

pub mod catalog;
pub mod contact;
pub mod search;
