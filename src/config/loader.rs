// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{PlanFile, RawPlanFile, TomlPlanFile};
use crate::errors::Result;
use crate::types::InputFormat;

/// Load a plan from a given path and return the raw `RawPlanFile`.
///
/// The format follows the file extension (`.json` is a schedule request
/// body, anything else is a TOML plan). This only performs deserialization;
/// use [`load_and_validate`] for the semantic checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawPlanFile> {
    let path = path.as_ref();
    load_from_path_as(path, InputFormat::from_path(path))
}

/// Like [`load_from_path`], but with the format given explicitly.
pub fn load_from_path_as(path: impl AsRef<Path>, format: InputFormat) -> Result<RawPlanFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    debug!(path = %path.display(), ?format, "loading plan");
    parse_str(&contents, format)
}

/// Parse plan contents in the given format.
pub fn parse_str(contents: &str, format: InputFormat) -> Result<RawPlanFile> {
    let raw = match format {
        InputFormat::Toml => RawPlanFile::from(toml::from_str::<TomlPlanFile>(contents)?),
        InputFormat::Json => serde_json::from_str::<RawPlanFile>(contents)?,
    };
    Ok(raw)
}

/// Load a plan from path and run validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML or JSON.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - an empty task set,
///   - blank titles,
///   - duplicate titles / unknown dependencies when `[config]` asks for it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<PlanFile> {
    let path = path.as_ref();
    load_and_validate_as(path, InputFormat::from_path(path))
}

/// [`load_and_validate`] with an explicit format instead of the extension.
pub fn load_and_validate_as(path: impl AsRef<Path>, format: InputFormat) -> Result<PlanFile> {
    let raw = load_from_path_as(path, format)?;
    let plan = PlanFile::try_from(raw)?;
    Ok(plan)
}

/// Default plan location: `Taskdag.toml` in the current working directory.
pub fn default_input_path() -> PathBuf {
    PathBuf::from("Taskdag.toml")
}
