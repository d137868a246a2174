//! CLI argument parsing for strut.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};

/// Strut: scaffold CMake-based C++ projects with prewired third-party dependencies.
///
/// Projects are generated from named templates living in a template
/// repository directory:
/// - each template is a subdirectory holding a `<id>.template` descriptor
///   and a `<id>.cpp` source fragment
/// - descriptors declare what to fetch, what to link, and what to call
/// - generated projects configure and build with CMake as-is
#[derive(Parser, Debug)]
#[command(name = "strut")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for strut.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new project.
    ///
    /// Creates the project directory, a CMakeLists.txt wired for the
    /// requested templates, and a src/Main.cpp entry point.
    New(NewArgs),

    /// List templates available in the template repository.
    ///
    /// Shows each template's dependency name and link target.
    #[command(alias = "list")]
    Templates(TemplatesArgs),
}

/// Arguments for the `new` command.
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Name for the new project (may contain spaces).
    #[arg(short, long, default_value = "NewProject")]
    pub name: String,

    /// Directory under which the project directory is created.
    /// Defaults to the configured target directory.
    #[arg(short, long)]
    pub directory: Option<String>,

    /// Directory containing one subdirectory per template.
    /// Defaults to the configured template repository.
    #[arg(long)]
    pub template_repo: Option<String>,

    /// Templates to wire into the generated project, in order.
    #[arg(short, long, value_delimiter = ',')]
    pub templates: Vec<String>,
}

/// Arguments for the `templates` command.
#[derive(Parser, Debug)]
pub struct TemplatesArgs {
    /// Directory containing one subdirectory per template.
    /// Defaults to the configured template repository.
    #[arg(long)]
    pub template_repo: Option<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
