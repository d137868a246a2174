//! Tests for the generation pipeline.

use super::*;
use crate::test_support::{
    DirGuard, SFML_DESCRIPTOR, SFML_FRAGMENT, create_template_repo, write_template,
};
use serial_test::serial;
use tempfile::TempDir;

fn info(target: &Path, repo: &Path, name: &str, templates: &[&str]) -> ProjectInfo {
    ProjectInfo {
        name: name.to_string(),
        target_dir: target.to_path_buf(),
        template_repo: repo.to_path_buf(),
        templates: templates.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn build_identifier_strips_all_whitespace() {
    assert_eq!(build_identifier("My App"), "MyApp");
    assert_eq!(build_identifier("  My\tGame \n"), "MyGame");
    assert_eq!(build_identifier("Foo"), "Foo");
}

#[test]
fn template_free_generation_creates_hello_world_project() {
    let target = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();

    let generated = generate(&info(target.path(), repo.path(), "Foo", &[])).unwrap();

    assert_eq!(generated.project_dir, target.path().join("Foo"));
    assert!(generated.build_file.exists());
    assert!(generated.entry_file.exists());

    let cmake = fs::read_to_string(&generated.build_file).unwrap();
    assert!(cmake.contains("project(Foo VERSION 1.0 LANGUAGES CXX)"));
    assert!(!cmake.contains("FetchContent"));
    assert!(!cmake.contains("target_link_libraries"));

    let main_cpp = fs::read_to_string(&generated.entry_file).unwrap();
    let expected = "\
#include <iostream>

int main() {
    std::cout << \"Hello, World!\" << std::endl;

    return 0;
}
";
    assert_eq!(main_cpp, expected);
}

#[test]
fn generation_with_template_wires_dependency() {
    let target = TempDir::new().unwrap();
    let repo = create_template_repo();

    let generated = generate(&info(target.path(), repo.path(), "My App", &["sfml"])).unwrap();

    // Spaces are stripped from the build identifier, not the directory name.
    assert_eq!(generated.project_dir, target.path().join("My App"));

    let cmake = fs::read_to_string(&generated.build_file).unwrap();
    assert!(cmake.contains("project(MyApp VERSION 1.0 LANGUAGES CXX)"));
    assert!(cmake.contains("include(FetchContent)"));
    assert!(cmake.contains("GIT_REPOSITORY https://github.com/SFML/SFML.git"));
    assert!(cmake.contains("GIT_TAG        2.6.x"));
    assert!(cmake.contains("FetchContent_MakeAvailable(SFML)"));
    assert!(cmake.contains("add_executable(MyApp ./src/Main.cpp)"));
    assert!(cmake.contains("target_link_libraries(MyApp\n    sfml-graphics\n)"));

    let main_cpp = fs::read_to_string(&generated.entry_file).unwrap();
    assert!(main_cpp.contains("// sfml"));
    assert!(main_cpp.contains("#include <SFML/Graphics.hpp>"));
    assert!(main_cpp.contains("initSfml();"));
}

#[test]
fn generation_preserves_template_order() {
    let target = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    write_template(repo.path(), "sfml", SFML_DESCRIPTOR, SFML_FRAGMENT);
    write_template(
        repo.path(),
        "imgui",
        "name=ImGui\nrepo=https://github.com/ocornut/imgui.git\ntag=v1.90\nlinklib=imgui\nstart=initImgui\n",
        "void initImgui() {}\n",
    );

    let generated =
        generate(&info(target.path(), repo.path(), "Ordered", &["imgui", "sfml"])).unwrap();

    let cmake = fs::read_to_string(&generated.build_file).unwrap();
    assert!(cmake.find("FetchContent_MakeAvailable(ImGui)").unwrap()
        < cmake.find("FetchContent_MakeAvailable(SFML)").unwrap());
    assert!(cmake.find("    imgui").unwrap() < cmake.find("    sfml-graphics").unwrap());

    let main_cpp = fs::read_to_string(&generated.entry_file).unwrap();
    assert!(main_cpp.find("initImgui();").unwrap() < main_cpp.find("initSfml();").unwrap());
}

#[test]
fn generation_fails_when_project_dir_exists() {
    let target = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    let info = info(target.path(), repo.path(), "Foo", &[]);

    generate(&info).unwrap();
    let first_cmake = fs::read_to_string(target.path().join("Foo").join(BUILD_FILE)).unwrap();

    // Second run with identical inputs must fail and modify nothing.
    let err = generate(&info).unwrap_err();
    assert!(matches!(err, StrutError::ProjectExists(_)));

    let second_cmake = fs::read_to_string(target.path().join("Foo").join(BUILD_FILE)).unwrap();
    assert_eq!(first_cmake, second_cmake);
}

#[test]
fn generation_fails_when_project_path_is_a_file() {
    let target = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    fs::write(target.path().join("Foo"), "in the way").unwrap();

    let err = generate(&info(target.path(), repo.path(), "Foo", &[])).unwrap_err();
    assert!(matches!(err, StrutError::ProjectExists(_)));
}

#[test]
fn missing_descriptor_fails_and_leaves_project_dir() {
    let target = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();

    let err = generate(&info(target.path(), repo.path(), "Foo", &["nonexistent"])).unwrap_err();
    assert!(matches!(err, StrutError::TemplateNotFound(_)));

    // No rollback: the already-created project directory stays behind.
    let project_dir = target.path().join("Foo");
    assert!(project_dir.exists());
    assert!(!project_dir.join(BUILD_FILE).exists());
}

#[test]
fn malformed_descriptor_aborts_run() {
    let target = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    write_template(repo.path(), "broken", "name=Broken\n", "void initBroken() {}\n");

    let err = generate(&info(target.path(), repo.path(), "Foo", &["broken"])).unwrap_err();
    assert!(matches!(err, StrutError::MissingField(_, _)));
}

#[test]
fn missing_fragment_fails_after_build_descriptor_write() {
    let target = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();

    // Descriptor only, no .cpp fragment.
    let dir = repo.path().join("sfml");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("sfml.template"), SFML_DESCRIPTOR).unwrap();

    let err = generate(&info(target.path(), repo.path(), "Foo", &["sfml"])).unwrap_err();
    assert!(matches!(err, StrutError::TemplateNotFound(_)));

    // The build descriptor was already written; the entry point was not.
    let project_dir = target.path().join("Foo");
    assert!(project_dir.join(BUILD_FILE).exists());
    assert!(!project_dir.join("src").exists());
}

#[test]
fn fragment_lines_are_copied_verbatim() {
    let target = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    // Odd spacing survives the copy untouched.
    let fragment = "void   initWeird()   {\n\t// tab-indented comment\n}\n";
    write_template(
        repo.path(),
        "weird",
        "name=Weird\nrepo=https://x.git\ntag=v1\nlinklib=weird\nstart=initWeird\n",
        fragment,
    );

    let generated = generate(&info(target.path(), repo.path(), "Foo", &["weird"])).unwrap();
    let main_cpp = fs::read_to_string(&generated.entry_file).unwrap();

    assert!(main_cpp.contains("void   initWeird()   {"));
    assert!(main_cpp.contains("\t// tab-indented comment"));
}

#[test]
#[serial]
fn generation_resolves_relative_target_dir_against_cwd() {
    let cwd = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    let _guard = DirGuard::new(cwd.path());

    let generated = generate(&info(Path::new("."), repo.path(), "Rel", &[])).unwrap();
    assert!(generated.project_dir.exists());
    assert!(cwd.path().join("Rel").join(BUILD_FILE).exists());
}
