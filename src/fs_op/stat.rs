use std::fs;
use std::path::Path;

/// Kind of filesystem entry found at a path.
///
/// Symlinks are followed, so a link pointing at a regular file classifies
/// as `File` and a dangling link as `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// Nothing exists at the path, or it cannot be stat'ed.
    NotFound,
    /// A directory.
    Directory,
    /// A regular file.
    File,
    /// Anything else: socket, FIFO, device node.
    Other,
}

impl PathType {
    /// Classify `path` with a single `stat` call.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        match fs::metadata(path.as_ref()) {
            Err(_) => PathType::NotFound,
            Ok(meta) if meta.is_dir() => PathType::Directory,
            Ok(meta) if meta.is_file() => PathType::File,
            Ok(_) => PathType::Other,
        }
    }

    pub fn is_regular_file(self) -> bool {
        self == PathType::File
    }
}

/// Return `true` if something exists at `path`.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) != PathType::NotFound
}
