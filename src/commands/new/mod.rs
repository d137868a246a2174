//! Implementation of the `strut new` command.
//!
//! # What `strut new` does
//!
//! 1. Loads the optional user config for default directories
//! 2. Merges command-line flags over the config (flags win)
//! 3. Generates the project directory, CMakeLists.txt, and src/Main.cpp
//! 4. Prints a summary of the created files


use crate::cli::NewArgs;
use crate::config::Config;
use crate::error::Result;
use crate::generate::{self, ProjectInfo};

/// Execute the `strut new` command.
pub fn cmd_new(args: NewArgs) -> Result<()> {
    let config = Config::load_default()?;
    let info = resolve_project_info(args, &config);

    let generated = generate::generate(&info)?;

    // Print success message
    println!("Created project '{}'.", info.name);
    println!();
    println!("  {}", generated.project_dir.display());
    println!("  {}", generated.build_file.display());
    println!("  {}", generated.entry_file.display());
    if !info.templates.is_empty() {
        println!();
        println!("Templates wired in: {}", info.templates.join(", "));
    }

    Ok(())
}

/// Merge CLI flags over config defaults into a fully-resolved ProjectInfo.
///
/// The generator never consults the config itself; everything it needs is
/// resolved here, tilde-expansion included.
fn resolve_project_info(args: NewArgs, config: &Config) -> ProjectInfo {
    let target_dir = args.directory.unwrap_or_else(|| config.target_dir.clone());
    let template_repo = args
        .template_repo
        .unwrap_or_else(|| config.template_repo.clone());

    ProjectInfo {
        name: args.name,
        target_dir: Config::expand_path(&target_dir),
        template_repo: Config::expand_path(&template_repo),
        templates: args.templates,
    }
}
