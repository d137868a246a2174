//! Entry-point source assembly.
//!
//! Builds the generated `src/Main.cpp`: a fixed include prelude, the
//! template source fragments in request order, and a `main` that prints a
//! greeting and then calls each template's startup function in the same
//! order.

use crate::template::Template;

/// Render the entry-point source.
///
/// `fragments` is the pre-assembled block of template source lines (comment
/// markers and separators included). With no templates the result is a
/// plain hello-world program.
pub fn render(resolved: &[Template], fragments: &[String]) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("#include <iostream>".to_string());
    lines.push(String::new());

    for line in fragments {
        lines.push(line.clone());
    }

    lines.push("int main() {".to_string());
    lines.push("    std::cout << \"Hello, World!\" << std::endl;".to_string());

    for t in resolved {
        lines.push(String::new());
        lines.push(format!("    // {}", t.id));
        lines.push(format!("    {}();", t.start_fn));
    }

    lines.push(String::new());
    lines.push("    return 0;".to_string());
    lines.push("}".to_string());

    lines.join("\n") + "\n"
}
