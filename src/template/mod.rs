//! Template records and descriptor loading.
//!
//! A template is a named third-party dependency integration living in the
//! template repository as `{repo}/{id}/`:
//! - `{id}.template` — key=value descriptor declaring what to fetch, what to
//!   link, and what to call at startup
//! - `{id}.cpp` — source fragment copied verbatim into the generated Main.cpp
//!
//! Descriptor format: one `key=value` pair per line, split at the **first**
//! `=`; the value is everything after it, including any further `=`
//! characters. Keys and values are never trimmed — the exact byte content
//! after the delimiter is the value. Lines without `=` are skipped silently.
//! Unrecognized keys warn on stderr but do not fail the load.
//!
//! Templates are loaded fresh on every run; nothing is cached.

use crate::error::{Result, StrutError};
use std::path::{Path, PathBuf};

/// Descriptor file extension.
pub const DESCRIPTOR_EXT: &str = "template";

/// Source fragment file extension.
pub const FRAGMENT_EXT: &str = "cpp";

/// A loaded dependency template.
///
/// All five descriptor fields are validated non-empty at load time; a
/// `Template` in hand is always usable for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Identifier naming the template directory and its files.
    pub id: String,
    /// Dependency name used in the generated FetchContent blocks.
    pub name: String,
    /// Git repository URL to fetch.
    pub repo: String,
    /// Git tag, branch, or revision to fetch.
    pub tag: String,
    /// CMake target the generated executable links against.
    pub link_lib: String,
    /// Function the generated main() calls at startup.
    pub start_fn: String,
}

impl Template {
    /// Load a template's descriptor from the template repository.
    ///
    /// # Returns
    ///
    /// * `Ok(Template)` - Descriptor found and all required fields present
    /// * `Err(StrutError::TemplateNotFound)` - Descriptor could not be opened
    /// * `Err(StrutError::MissingField)` - Descriptor parsed but incomplete
    pub fn load(template_repo: &Path, id: &str) -> Result<Self> {
        let path = descriptor_path(template_repo, id);
        let content = std::fs::read_to_string(&path).map_err(|e| {
            StrutError::TemplateNotFound(format!(
                "template descriptor '{}' could not be opened: {}",
                path.display(),
                e
            ))
        })?;

        parse_descriptor(id, &content)
    }
}

/// Path of a template's descriptor file: `{repo}/{id}/{id}.template`.
pub fn descriptor_path(template_repo: &Path, id: &str) -> PathBuf {
    template_repo
        .join(id)
        .join(format!("{}.{}", id, DESCRIPTOR_EXT))
}

/// Path of a template's source fragment: `{repo}/{id}/{id}.cpp`.
pub fn fragment_path(template_repo: &Path, id: &str) -> PathBuf {
    template_repo
        .join(id)
        .join(format!("{}.{}", id, FRAGMENT_EXT))
}

/// Parse descriptor text into a template record.
///
/// Recognized keys: `name`, `repo`, `tag`, `linklib`, `start`. A repeated
/// key overwrites the earlier value. Missing required fields are reported
/// together, not one at a time.
fn parse_descriptor(id: &str, content: &str) -> Result<Template> {
    let mut name = String::new();
    let mut repo = String::new();
    let mut tag = String::new();
    let mut link_lib = String::new();
    let mut start_fn = String::new();

    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        match key {
            "name" => name = value.to_string(),
            "repo" => repo = value.to_string(),
            "tag" => tag = value.to_string(),
            "linklib" => link_lib = value.to_string(),
            "start" => start_fn = value.to_string(),
            unknown => {
                eprintln!(
                    "Warning: template '{}': ignoring unrecognized descriptor key '{}'",
                    id, unknown
                );
            }
        }
    }

    let mut missing = Vec::new();
    if name.is_empty() {
        missing.push("name");
    }
    if repo.is_empty() {
        missing.push("repo");
    }
    if tag.is_empty() {
        missing.push("tag");
    }
    if link_lib.is_empty() {
        missing.push("linklib");
    }
    if start_fn.is_empty() {
        missing.push("start");
    }

    if !missing.is_empty() {
        return Err(StrutError::MissingField(id.to_string(), missing.join(", ")));
    }

    Ok(Template {
        id: id.to_string(),
        name,
        repo,
        tag,
        link_lib,
        start_fn,
    })
}
