//! Project generation pipeline.
//!
//! `generate` runs the whole scaffolding sequence: claim the project
//! directory, resolve the requested templates, assemble the build descriptor
//! and the entry-point source, and write both.
//!
//! Every step is a hard failure point and nothing is rolled back on error;
//! a failed run can leave a partially-populated project directory behind.
//! Running twice with the same inputs fails the second time because the
//! project directory already exists.

pub mod cmake;
pub mod entry;

#[cfg(test)]
mod tests;

use crate::error::{Result, StrutError};
use crate::fs::atomic_write_file;
use crate::template::{self, Template};
use std::fs;
use std::path::{Path, PathBuf};

/// Build-descriptor filename at the project root.
pub const BUILD_FILE: &str = "CMakeLists.txt";

/// Entry-point source filename under `src/`.
pub const ENTRY_FILE: &str = "Main.cpp";

/// Everything needed to generate one project.
///
/// All defaults are resolved by the command layer before this is built; the
/// generator itself consults no configuration.
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    /// Display name of the new project; may contain spaces.
    pub name: String,
    /// Directory under which the project directory is created.
    pub target_dir: PathBuf,
    /// Directory containing one subdirectory per known template.
    pub template_repo: PathBuf,
    /// Requested template identifiers, in invocation order.
    ///
    /// Order is significant: it fixes fetch-block order, link order,
    /// fragment order, and startup-call order in the generated files.
    pub templates: Vec<String>,
}

/// Paths created by a successful generation run.
#[derive(Debug)]
pub struct GeneratedProject {
    pub project_dir: PathBuf,
    pub build_file: PathBuf,
    pub entry_file: PathBuf,
}

/// Generate a new project tree per `info`.
///
/// With an empty template list this produces a plain hello-world project:
/// same pipeline, no fetch/link blocks, no fragments, no startup calls.
pub fn generate(info: &ProjectInfo) -> Result<GeneratedProject> {
    let project_dir = info.target_dir.join(&info.name);
    if project_dir.exists() {
        return Err(StrutError::ProjectExists(
            project_dir.display().to_string(),
        ));
    }
    create_dir(&project_dir)?;

    let build_id = build_identifier(&info.name);

    // Resolve templates in request order; the first loader failure aborts
    // the whole run.
    let mut resolved = Vec::with_capacity(info.templates.len());
    for id in &info.templates {
        resolved.push(Template::load(&info.template_repo, id)?);
    }

    let build_file = project_dir.join(BUILD_FILE);
    atomic_write_file(&build_file, &cmake::render(&build_id, &resolved))?;

    // Fragments are read after the build descriptor is written; a missing
    // fragment leaves CMakeLists.txt in place.
    let fragments = load_fragments(&info.template_repo, &resolved)?;

    let src_dir = project_dir.join("src");
    create_dir(&src_dir)?;

    let entry_file = src_dir.join(ENTRY_FILE);
    atomic_write_file(&entry_file, &entry::render(&resolved, &fragments))?;

    Ok(GeneratedProject {
        project_dir,
        build_file,
        entry_file,
    })
}

/// Project name with all whitespace removed.
///
/// CMake project and target identifiers must not contain spaces; the
/// display name keeps them.
pub fn build_identifier(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        StrutError::CreateDir(format!(
            "failed to create directory '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Read every resolved template's source fragment, in order.
///
/// Each fragment is copied line by line, preceded by a `// {id}` comment
/// marker and followed by a blank separator line.
fn load_fragments(template_repo: &Path, resolved: &[Template]) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    for t in resolved {
        let path = template::fragment_path(template_repo, &t.id);
        let content = fs::read_to_string(&path).map_err(|e| {
            StrutError::TemplateNotFound(format!(
                "template fragment '{}' could not be opened: {}",
                path.display(),
                e
            ))
        })?;

        lines.push(format!("// {}", t.id));
        for line in content.lines() {
            lines.push(line.to_string());
        }
        lines.push(String::new());
    }

    Ok(lines)
}
