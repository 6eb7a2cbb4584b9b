use std::path::{Component, Path, PathBuf};

/// Resolves user-typed paths against a home directory and a working
/// directory without touching the filesystem.
#[derive(Debug, Clone)]
pub struct PathExpander {
    home: PathBuf,
}

impl PathExpander {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn expand(&self, path: &str) -> PathBuf {
        if path.starts_with('~') {
            self.expand_tilde(path)
        } else {
            PathBuf::from(path)
        }
    }

    fn expand_tilde(&self, path: &str) -> PathBuf {
        let without_tilde = &path[1..];
        if without_tilde.is_empty() {
            self.home.clone()
        } else if let Some(stripped) = without_tilde.strip_prefix('/') {
            let mut home_path = self.home.clone();
            for part in stripped.split('/').filter(|part| !part.is_empty()) {
                home_path.push(part);
            }
            home_path
        } else {
            // "~user" forms are left alone
            PathBuf::from(path)
        }
    }

    /// Expands `~`, joins relative paths onto `cwd` and folds `.`/`..`
    /// lexically, like `abspath`.
    pub fn absolutize(&self, path: &str, cwd: &Path) -> PathBuf {
        let expanded = self.expand(path);
        let joined = if expanded.is_absolute() {
            expanded
        } else {
            cwd.join(expanded)
        };
        normalize(&joined)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() && !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Replaces a leading `home` with `~`, matching whole path components only.
pub fn abbreviate_home(path: &Path, home: &Path) -> String {
    match path.strip_prefix(home) {
        Ok(rest) if home.as_os_str().len() > 1 => {
            if rest.as_os_str().is_empty() {
                "~".to_string()
            } else {
                format!("~/{}", rest.display())
            }
        }
        _ => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expander() -> PathExpander {
        PathExpander::new("/home/alice")
    }

    #[test]
    fn test_expand_tilde() {
        let exp = expander();
        assert_eq!(exp.expand("~"), PathBuf::from("/home/alice"));
        assert_eq!(exp.expand("~/src//shell"), PathBuf::from("/home/alice/src/shell"));
        assert_eq!(exp.expand("~bob/x"), PathBuf::from("~bob/x"));
        assert_eq!(exp.expand("plain"), PathBuf::from("plain"));
    }

    #[test]
    fn test_absolutize() {
        let exp = expander();
        let cwd = Path::new("/var/log");
        assert_eq!(exp.absolutize("nginx", cwd), PathBuf::from("/var/log/nginx"));
        assert_eq!(exp.absolutize("../tmp/./x", cwd), PathBuf::from("/var/tmp/x"));
        assert_eq!(exp.absolutize("/etc/", cwd), PathBuf::from("/etc"));
        assert_eq!(exp.absolutize("~/a/..", cwd), PathBuf::from("/home/alice"));
        assert_eq!(exp.absolutize("../../../..", cwd), PathBuf::from("/"));
    }

    #[test]
    fn test_abbreviate_home() {
        let home = Path::new("/home/alice");
        assert_eq!(abbreviate_home(Path::new("/home/alice"), home), "~");
        assert_eq!(abbreviate_home(Path::new("/home/alice/src"), home), "~/src");
        assert_eq!(abbreviate_home(Path::new("/home/alice2"), home), "/home/alice2");
        assert_eq!(abbreviate_home(Path::new("/tmp"), home), "/tmp");
        assert_eq!(abbreviate_home(Path::new("/tmp"), Path::new("/")), "/tmp");
    }
}
