//! Lab Catalog Module
//!
//! Holds the lab dataset and everything needed to make its raw fields
//! usable: the source data carries embedded newlines, stray whitespace, and
//! multi-valued discipline strings, all of which must be tolerated rather
//! than rejected.
//!
//! ## Core Concepts
//! - **Cleaning**: Every display field is normalized (newlines to spaces,
//!   whitespace trimmed) before it is filtered on, faceted, or returned.
//! - **Taxonomy**: Raw discipline strings are split and mapped onto a fixed
//!   set of canonical categories via an ordered keyword table.
//! - **Store**: `LabStore` loads the source JSON once at startup and
//!   precomputes per-record derived fields and the global facet lists. The
//!   set is never mutated afterwards, so requests share it behind an `Arc`
//!   with no locking.
//!
//! ## Submodules
//! - **`normalize`**: Field cleaning and discipline splitting/mapping.
//! - **`store`**: The loaded, indexed dataset.
//! - **`types`**: Record shapes (source-file and derived).

pub mod normalize;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
