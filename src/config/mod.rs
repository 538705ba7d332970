// src/config/mod.rs

//! Plan loading and validation for taskdag.
//!
//! Responsibilities:
//! - Define the TOML / JSON backed data model (`model.rs`).
//! - Load a plan file from disk (`loader.rs`).
//! - Validate basic invariants before scheduling (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    default_input_path, load_and_validate, load_and_validate_as, load_from_path,
    load_from_path_as, parse_str,
};
pub use model::{ConfigSection, PlanFile, RawPlanFile, TaskConfig, TomlPlanFile};
pub use validate::validate_raw_plan;
