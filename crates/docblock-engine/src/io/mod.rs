use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

/// Alias that marks a path as relative to the configured source root.
pub const DEFAULT_ALIAS: &str = "@/";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Failed to open file '{}'", .0.display())]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid source directory: {0}")]
    InvalidSourceDir(String),
}

/// Maps alias-prefixed references (`@/step/mv.rs`) onto the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    alias: String,
    source_root: PathBuf,
}

impl PathResolver {
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self::with_alias(DEFAULT_ALIAS, source_root)
    }

    pub fn with_alias(alias: impl Into<String>, source_root: impl Into<PathBuf>) -> Self {
        Self {
            alias: alias.into(),
            source_root: source_root.into(),
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Rewrite a leading alias to the source root; any other path passes through
    /// untouched. An empty alias never matches.
    pub fn resolve(&self, raw: &str) -> PathBuf {
        match raw.strip_prefix(self.alias.as_str()) {
            Some(rest) if !self.alias.is_empty() => {
                RelativePath::new(rest).to_path(&self.source_root)
            }
            _ => PathBuf::from(raw),
        }
    }
}

/// Read one source file in full. Each call re-reads from disk.
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// List the `.rs` files directly inside `dir`, sorted by name.
pub fn scan_rust_files(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !dir.is_dir() {
        return Err(IoError::InvalidSourceDir(format!(
            "'{}' is not a directory",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file()
            && let Some(ext) = path.extension()
            && ext == "rs"
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
