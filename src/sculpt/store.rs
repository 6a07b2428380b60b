//! Mesh asset store collaborator
//!
//! The sculptor only talks to the trait; the host decides where meshes
//! actually live. [`DirAssetStore`] is a JSON directory-backed
//! implementation suitable for standalone tools and tests.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::Error;
use crate::core::types::Result;
use crate::mesh::flat::{FlatMesh, MeshId};

/// External mesh persistence, keyed by resource identity.
///
/// `create` is an upsert: it stages the mesh contents for `path` and
/// registers the association so later saves of the same resource reuse
/// the path. Nothing reaches durable storage until `commit`.
pub trait MeshAssetStore {
    /// Load a mesh from the store, registering its path
    fn load(&mut self, path: &Path) -> Result<FlatMesh>;

    /// Path this mesh resource was previously created at or loaded from
    fn existing_path(&self, mesh: &FlatMesh) -> Option<PathBuf>;

    /// Ask the user (or policy) for a save path; `None` means declined
    fn prompt_save_path(&self) -> Option<PathBuf>;

    /// Stage the mesh contents for `path` and register the association
    fn create(&mut self, mesh: &FlatMesh, path: &Path) -> Result<()>;

    /// Flush all staged writes
    fn commit(&mut self) -> Result<()>;
}

/// Directory of pretty-printed JSON mesh files
#[derive(Debug, Default)]
pub struct DirAssetStore {
    root: PathBuf,
    registered: HashMap<MeshId, PathBuf>,
    staged: Vec<(PathBuf, String)>,
}

impl DirAssetStore {
    /// Store rooted at `root`; the directory is created on commit
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            registered: HashMap::new(),
            staged: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl MeshAssetStore for DirAssetStore {
    fn load(&mut self, path: &Path) -> Result<FlatMesh> {
        let full = self.root.join(path);
        let json = fs::read_to_string(&full)?;
        let mesh: FlatMesh = serde_json::from_str(&json)?;
        // Deserialization mints a fresh id, so drop any registration a
        // previous load of this path left behind.
        self.registered.retain(|_, p| p.as_path() != path);
        self.registered.insert(mesh.id(), path.to_path_buf());
        log::info!("loaded mesh {:?} ({} vertices)", full, mesh.vertex_count());
        Ok(mesh)
    }

    fn existing_path(&self, mesh: &FlatMesh) -> Option<PathBuf> {
        self.registered.get(&mesh.id()).cloned()
    }

    fn prompt_save_path(&self) -> Option<PathBuf> {
        // No interactive prompt for a directory store; callers get a
        // default file name in the root.
        Some(PathBuf::from("sculpt.json"))
    }

    fn create(&mut self, mesh: &FlatMesh, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(mesh)?;
        self.staged.push((path.to_path_buf(), json));
        self.registered.insert(mesh.id(), path.to_path_buf());
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        if self.staged.is_empty() {
            return Ok(());
        }
        fs::create_dir_all(&self.root)?;
        for (path, json) in self.staged.drain(..) {
            let full = self.root.join(&path);
            fs::write(&full, json)?;
            log::info!("wrote mesh asset {:?}", full);
        }
        Ok(())
    }
}

/// Convenience for hosts that keep everything in memory (tests, web)
#[derive(Debug, Default)]
pub struct MemoryAssetStore {
    registered: HashMap<MeshId, PathBuf>,
    files: HashMap<PathBuf, String>,
    staged: Vec<(PathBuf, String)>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored JSON for a path, if committed
    pub fn contents(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }
}

impl MeshAssetStore for MemoryAssetStore {
    fn load(&mut self, path: &Path) -> Result<FlatMesh> {
        let json = self
            .files
            .get(path)
            .ok_or_else(|| Error::Asset(format!("no mesh stored at {:?}", path)))?;
        let mesh: FlatMesh = serde_json::from_str(json)?;
        self.registered.retain(|_, p| p.as_path() != path);
        self.registered.insert(mesh.id(), path.to_path_buf());
        Ok(mesh)
    }

    fn existing_path(&self, mesh: &FlatMesh) -> Option<PathBuf> {
        self.registered.get(&mesh.id()).cloned()
    }

    fn prompt_save_path(&self) -> Option<PathBuf> {
        Some(PathBuf::from("sculpt.json"))
    }

    fn create(&mut self, mesh: &FlatMesh, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(mesh)?;
        self.staged.push((path.to_path_buf(), json));
        self.registered.insert(mesh.id(), path.to_path_buf());
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        for (path, json) in self.staged.drain(..) {
            self.files.insert(path, json);
        }
        Ok(())
    }
}
