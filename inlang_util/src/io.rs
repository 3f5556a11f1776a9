use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{fs, io};

#[derive(Debug)]
pub struct IoErrorWithPath {
    pub error: io::Error,
    pub path: PathBuf,
}

pub trait IoErrorExt {
    fn with_path(self, path: impl AsRef<Path>) -> IoErrorWithPath;
}

impl IoErrorExt for io::Error {
    fn with_path(self, path: impl AsRef<Path>) -> IoErrorWithPath {
        IoErrorWithPath {
            error: self,
            path: path.as_ref().to_owned(),
        }
    }
}

impl Display for IoErrorWithPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.error)
    }
}

impl std::error::Error for IoErrorWithPath {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Read a file to a string, mapping a missing file to `None` instead of an error.
pub fn read_to_string_if_exists(path: &Path) -> Result<Option<String>, IoErrorWithPath> {
    match fs::read_to_string(path) {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.with_path(path)),
    }
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_creating_dirs(path: &Path, content: &str) -> Result<(), IoErrorWithPath> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| e.with_path(parent))?;
    }
    fs::write(path, content).map_err(|e| e.with_path(path))
}
