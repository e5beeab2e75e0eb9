//! Memory-mapped file backend.
//!
//! Provides [`crate::file::physical::Physical`], a read-only backend over a
//! memory-mapped file on disk. Mapping avoids reading the whole executable into
//! memory upfront and lets the operating system page it in on demand, which suits
//! the access pattern of the signature sweep.

use super::Backend;
use crate::{
    Error::{Error, FileError},
    Result,
};

use memmap2::Mmap;
use std::{fs, path::Path};

/// A file backend that uses memory-mapped I/O for efficient access to files on disk.
///
/// The mapping is created read-only and shared. All access operations include
/// bounds checking to ensure memory safety.
///
/// # Examples
///
/// ```rust,ignore
/// use au3scope::file::{Backend, Physical};
/// use std::path::Path;
///
/// let physical = Physical::new(Path::new("packed.exe"))?;
/// println!("Input size: {} bytes", physical.len());
/// # Ok::<(), au3scope::Error>(())
/// ```
#[derive(Debug)]
pub struct Physical {
    /// Memory-mapped file data
    data: Mmap,
}

impl Physical {
    /// Create a new physical file backend by memory-mapping the specified file.
    ///
    /// # Arguments
    /// * `path` - Path to the input file on disk. Accepts `&Path`, `&str`, `String`, or `PathBuf`.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened or
    /// [`crate::Error::Error`] if memory mapping fails.
    pub fn new(path: impl AsRef<Path>) -> Result<Physical> {
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(error) => return Err(FileError(error)),
        };

        let mmap = match unsafe { Mmap::map(&file) } {
            Ok(mmap) => mmap,
            Err(error) => return Err(Error(error.to_string())),
        };

        Ok(Physical { data: mmap })
    }
}

impl Backend for Physical {
    fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
