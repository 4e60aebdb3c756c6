//! I/O boundary traits for testability
//!
//! The document store is abstracted behind a trait so services can be
//! exercised against temp directories in tests.

use std::io;
use std::path::PathBuf;

/// Document store abstraction: one JSON document per member id.
///
/// `fetch` distinguishes "no such document" (`Ok(None)`) from "store
/// unreachable" (`Err`). The application layer maps the former to
/// not-found and the latter to unavailable.
pub trait DocumentStore: Send + Sync {
    /// Read the raw document for an id. `Ok(None)` if no document exists.
    fn fetch(&self, id: &str) -> io::Result<Option<String>>;

    /// List all document ids in the store.
    fn list(&self) -> io::Result<Vec<String>>;
}

// ============================================================
// REAL IMPLEMENTATION
// ============================================================

/// Filesystem-backed store: `<root>/<id>.json` per member.
#[derive(Debug)]
pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn document_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }

    fn ensure_root(&self) -> io::Result<()> {
        if !self.root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("store root missing: {}", self.root.display()),
            ));
        }
        Ok(())
    }
}

impl DocumentStore for FsDocumentStore {
    fn fetch(&self, id: &str) -> io::Result<Option<String>> {
        self.ensure_root()?;

        // ids are plain names, never paths
        if id.contains(std::path::is_separator) || id.contains("..") {
            return Ok(None);
        }

        let path = self.document_path(id);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn list(&self) -> io::Result<Vec<String>> {
        self.ensure_root()?;

        let mut ids = Vec::new();
        for entry in walkdir::WalkDir::new(&self.root)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().map(|ext| ext == "json").unwrap_or(false) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }
}
