//! Build-descriptor assembly.
//!
//! Renders the generated CMakeLists.txt by direct line accumulation.
//! Directive order and blank lines are fixed; the output is meant to be
//! read, committed, and built as-is.

use crate::template::Template;

/// Minimum CMake version emitted in every generated project.
/// 3.14 is the first release with `FetchContent_MakeAvailable`.
const CMAKE_MINIMUM: &str = "3.14";

/// C++ standard pinned in every generated project.
const CXX_STANDARD: &str = "17";

/// Render the build descriptor for `build_id` and the resolved templates.
///
/// Fetch blocks and the link-library list follow resolution order. With no
/// templates the descriptor carries only the project, toolchain, and
/// executable declarations.
pub fn render(build_id: &str, resolved: &[Template]) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("cmake_minimum_required(VERSION {})", CMAKE_MINIMUM));
    lines.push(format!("project({} VERSION 1.0 LANGUAGES CXX)", build_id));
    lines.push(String::new());

    if !resolved.is_empty() {
        lines.push("include(FetchContent)".to_string());
        lines.push(String::new());

        for t in resolved {
            lines.push("FetchContent_Declare(".to_string());
            lines.push(format!("    {}", t.name));
            lines.push(format!("    GIT_REPOSITORY {}", t.repo));
            lines.push(format!("    GIT_TAG        {}", t.tag));
            lines.push(")".to_string());
            lines.push(format!("FetchContent_MakeAvailable({})", t.name));
            lines.push(String::new());
        }
    }

    lines.push(format!("set(CMAKE_CXX_STANDARD {})", CXX_STANDARD));
    lines.push("set(CMAKE_CXX_STANDARD_REQUIRED ON)".to_string());
    lines.push("set(CMAKE_WINDOWS_EXPORT_ALL_SYMBOLS ON)".to_string());
    lines.push("set(BUILD_SHARED_LIBS ON)".to_string());
    lines.push(String::new());

    lines.push(format!(
        "add_executable({} ./src/{})",
        build_id,
        super::ENTRY_FILE
    ));

    if !resolved.is_empty() {
        lines.push(format!("target_link_libraries({}", build_id));
        for t in resolved {
            lines.push(format!("    {}", t.link_lib));
        }
        lines.push(")".to_string());
    }

    lines.join("\n") + "\n"
}
