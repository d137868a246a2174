use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

pub(crate) const SFML_DESCRIPTOR: &str = "name=SFML\n\
                                          repo=https://github.com/SFML/SFML.git\n\
                                          tag=2.6.x\n\
                                          linklib=sfml-graphics\n\
                                          start=initSfml\n";

pub(crate) const SFML_FRAGMENT: &str = "#include <SFML/Graphics.hpp>\n\
                                        \n\
                                        void initSfml() {\n\
                                        \x20   sf::RenderWindow window(sf::VideoMode(200, 200), \"SFML\");\n\
                                        }\n";

/// Write a template directory `{repo}/{id}/` with a descriptor and fragment.
pub(crate) fn write_template(repo: &Path, id: &str, descriptor: &str, fragment: &str) {
    let dir = repo.join(id);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(format!("{}.template", id)), descriptor).unwrap();
    std::fs::write(dir.join(format!("{}.cpp", id)), fragment).unwrap();
}

/// A template repository with one ready-to-use `sfml` template.
pub(crate) fn create_template_repo() -> TempDir {
    let repo = TempDir::new().unwrap();
    write_template(repo.path(), "sfml", SFML_DESCRIPTOR, SFML_FRAGMENT);
    repo
}
