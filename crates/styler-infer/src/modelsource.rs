use std::path::PathBuf;

#[derive(Debug)]
pub enum ModelSource {
    File(PathBuf),
    Memory(Vec<u8>),
    Mapped(memmap2::Mmap),
}

impl ModelSource {
    /// Model bytes, for sources already held in memory.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            ModelSource::File(_) => None,
            ModelSource::Memory(bytes) => Some(bytes),
            ModelSource::Mapped(mmap) => Some(&mmap[..]),
        }
    }
}
