//! Implementation of the `strut templates` command.
//!
//! Lists the templates found in the template repository with their
//! dependency name and link target. Individual broken templates are
//! reported inline rather than failing the whole listing.

use crate::cli::TemplatesArgs;
use crate::config::Config;
use crate::error::{Result, StrutError};
use crate::template::Template;
use std::path::Path;

/// Execute the `strut templates` command.
pub fn cmd_templates(args: TemplatesArgs) -> Result<()> {
    let config = Config::load_default()?;
    let repo_raw = args
        .template_repo
        .unwrap_or_else(|| config.template_repo.clone());
    let repo = Config::expand_path(&repo_raw);

    let ids = list_template_ids(&repo)?;

    if ids.is_empty() {
        println!("No templates found in '{}'.", repo.display());
        return Ok(());
    }

    println!("Templates in '{}':", repo.display());
    println!();
    for id in &ids {
        match Template::load(&repo, id) {
            Ok(t) => println!("  {:<16} {} (links {})", t.id, t.name, t.link_lib),
            Err(e) => println!("  {:<16} [broken: {}]", id, e),
        }
    }

    Ok(())
}

/// Sorted subdirectory names of the template repository.
fn list_template_ids(repo: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(repo).map_err(|e| {
        StrutError::UserError(format!(
            "failed to read template repository '{}': {}",
            repo.display(),
            e
        ))
    })?;

    let mut ids = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            StrutError::UserError(format!(
                "failed to read template repository '{}': {}",
                repo.display(),
                e
            ))
        })?;

        if entry.path().is_dir()
            && let Some(name) = entry.file_name().to_str()
        {
            ids.push(name.to_string());
        }
    }

    ids.sort();
    Ok(ids)
}
