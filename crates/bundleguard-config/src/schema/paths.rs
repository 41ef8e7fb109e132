//! Filesystem layout of the build outputs.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Where the bundle producer leaves its artifacts and where the
/// distributables end up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Output directory holding the readable artifact.
    pub out_dir: PathBuf,
    /// File name of the readable distributable inside `out_dir`.
    pub readable_name: String,
    /// File name of the minified distributable inside `out_dir`.
    pub minified_name: String,
    /// Staging directory the minified build is written to.
    pub staging_dir: PathBuf,
    /// File name of the minified artifact inside `staging_dir`.
    pub staging_name: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            readable_name: "index.html".into(),
            minified_name: "index.min.html".into(),
            staging_dir: PathBuf::from("dist-minify"),
            staging_name: "index.html".into(),
        }
    }
}

impl PathsConfig {
    pub fn readable_path(&self) -> PathBuf {
        self.out_dir.join(&self.readable_name)
    }

    pub fn minified_path(&self) -> PathBuf {
        self.out_dir.join(&self.minified_name)
    }

    pub fn staging_path(&self) -> PathBuf {
        self.staging_dir.join(&self.staging_name)
    }

    /// Whether `staging_dir` is `out_dir` or one of its ancestors.
    ///
    /// Compared lexically, so `./dist`, `dist/` and `dist/sub/..` are all
    /// the same directory. A relative and an absolute path never compare
    /// as enclosing.
    pub fn staging_encloses_out_dir(&self) -> bool {
        let staging = lexical_normalize(&self.staging_dir);
        let out = lexical_normalize(&self.out_dir);
        if staging.has_root() != out.has_root() {
            return false;
        }
        out.starts_with(&staging)
    }

    /// Re-root relative directories under `base`. Absolute ones are kept.
    pub fn rooted_at(&self, base: &Path) -> Self {
        Self {
            out_dir: base.join(&self.out_dir),
            staging_dir: base.join(&self.staging_dir),
            ..self.clone()
        }
    }
}

/// Drop `.` components and resolve `..` against preceding normal
/// components, without touching the filesystem. An empty result means the
/// current directory.
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root is the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let paths = PathsConfig::default();
        assert_eq!(paths.readable_path(), Path::new("dist/index.html"));
        assert_eq!(paths.minified_path(), Path::new("dist/index.min.html"));
        assert_eq!(paths.staging_path(), Path::new("dist-minify/index.html"));
    }

    #[test]
    fn rooted_at_joins_relative_dirs() {
        let paths = PathsConfig::default().rooted_at(Path::new("/work"));
        assert_eq!(paths.readable_path(), Path::new("/work/dist/index.html"));
        assert_eq!(paths.staging_path(), Path::new("/work/dist-minify/index.html"));
    }

    #[test]
    fn rooted_at_keeps_absolute_dirs() {
        let paths = PathsConfig {
            out_dir: PathBuf::from("/abs/out"),
            ..PathsConfig::default()
        }
        .rooted_at(Path::new("/work"));
        assert_eq!(paths.out_dir, Path::new("/abs/out"));
    }

    fn layout(out_dir: &str, staging_dir: &str) -> PathsConfig {
        PathsConfig {
            out_dir: PathBuf::from(out_dir),
            staging_dir: PathBuf::from(staging_dir),
            ..PathsConfig::default()
        }
    }

    #[test]
    fn lexical_normalize_resolves_dots() {
        assert_eq!(lexical_normalize(Path::new("./dist")), Path::new("dist"));
        assert_eq!(lexical_normalize(Path::new("dist/sub/..")), Path::new("dist"));
        assert_eq!(lexical_normalize(Path::new("dist/..")), Path::new(""));
        assert_eq!(lexical_normalize(Path::new("../out")), Path::new("../out"));
        assert_eq!(lexical_normalize(Path::new("/../out")), Path::new("/out"));
    }

    #[test]
    fn default_staging_does_not_enclose_output() {
        assert!(!PathsConfig::default().staging_encloses_out_dir());
        assert!(!layout("dist", "dist-minify").staging_encloses_out_dir());
        assert!(!layout("dist", "dist/minify").staging_encloses_out_dir());
    }

    #[test]
    fn aliased_and_ancestor_staging_encloses_output() {
        assert!(layout("./dist", "dist").staging_encloses_out_dir());
        assert!(layout("dist", "dist/").staging_encloses_out_dir());
        assert!(layout("dist", ".").staging_encloses_out_dir());
        assert!(layout("dist", "dist/..").staging_encloses_out_dir());
        assert!(layout("build/dist", "build").staging_encloses_out_dir());
        assert!(layout("/work/dist", "/work/./x/..").staging_encloses_out_dir());
    }
}
