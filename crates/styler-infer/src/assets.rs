use crate::{InferError, ModelSource};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Where model files come from.
pub trait AssetSource {
    fn open(&self, name: &str) -> Result<ModelSource, InferError>;
}

/// Model files below a directory, memory-mapped on open.
///
/// On Android this is the directory the APK assets were extracted to.
#[derive(Clone, Debug)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> Result<PathBuf, InferError> {
        let relative = Path::new(name);
        let plain = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if name.is_empty() || !plain {
            return Err(InferError::Asset(format!(
                "asset name '{name}' must be a relative path inside the asset directory"
            )));
        }
        Ok(self.root.join(relative))
    }
}

impl AssetSource for DirectoryAssets {
    fn open(&self, name: &str) -> Result<ModelSource, InferError> {
        let path = self.resolve(name)?;
        let file = std::fs::File::open(&path)
            .map_err(|e| InferError::Asset(format!("cannot open {}: {e}", path.display())))?;
        if file.metadata()?.len() == 0 {
            return Err(InferError::Asset(format!("{} is empty", path.display())));
        }
        let mmap = unsafe { memmap2::Mmap::map(&file) }.map_err(|e| {
            InferError::Asset(format!("failed to memory-map {}: {e}", path.display()))
        })?;
        log::debug!("mapped asset {} ({} bytes)", path.display(), mmap.len());
        Ok(ModelSource::Mapped(mmap))
    }
}

/// Named in-memory model blobs.
#[derive(Clone, Debug, Default)]
pub struct MemoryAssets {
    assets: HashMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, name: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(name, bytes);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        self.assets.insert(name.into(), bytes);
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetSource for MemoryAssets {
    fn open(&self, name: &str) -> Result<ModelSource, InferError> {
        match self.assets.get(name) {
            Some(bytes) if bytes.is_empty() => {
                Err(InferError::Asset(format!("{name} is empty")))
            }
            Some(bytes) => Ok(ModelSource::Memory(bytes.clone())),
            None => Err(InferError::Asset(format!("unknown asset {name}"))),
        }
    }
}
