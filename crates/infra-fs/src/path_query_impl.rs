// PathQuery backed by std::fs
use std::io;
use std::path::Path;

use probe_core::domain::Existence;
use probe_core::port::PathQuery;

/// Existence query via `Path::try_exists`
///
/// Follows symlinks: a dangling link is `Ok(false)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdPathQuery;

impl PathQuery for StdPathQuery {
    fn try_exists(&self, path: &str) -> io::Result<bool> {
        Path::new(path).try_exists()
    }
}

/// Quiet existence check for callers that want the bare answer
///
/// Same policy as the probe (errors count as absent), no diagnostic line.
pub fn path_exists(path: impl AsRef<Path>) -> bool {
    Existence::from_query(&path.as_ref().try_exists()).is_present()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_existing_file_and_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("empty.txt");
        File::create(&file).unwrap();

        let query = StdPathQuery;
        assert!(query.try_exists(file.to_str().unwrap()).unwrap());
        assert!(query.try_exists(dir.path().to_str().unwrap()).unwrap());
    }

    #[test]
    fn test_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing").join("child");

        assert!(!StdPathQuery.try_exists(missing.to_str().unwrap()).unwrap());
        assert!(!path_exists(&missing));
    }

    #[test]
    fn test_empty_path_is_absent() {
        assert!(!path_exists(""));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(dir.path().join("target"), &link).unwrap();

        assert!(!path_exists(&link));
    }
}
