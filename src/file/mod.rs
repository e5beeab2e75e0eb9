//! Input file abstraction for packed executables and script containers.
//!
//! This module abstracts over the two ways input reaches the library — a file on
//! disk or an in-memory buffer — and provides the low-level reading utilities used
//! by the rest of the pipeline. The input is read once and never mutated; the
//! signature scanner takes its own scratch copies for the XOR sweeps.
//!
//! # Key Components
//!
//! ## Core Types
//! - [`crate::file::File`] - Main input abstraction
//! - [`crate::file::Backend`] - Trait for different data sources (disk files, memory buffers)
//!
//! ## Parsing Infrastructure
//! - [`crate::file::parser::Parser`] - Cursor-based parsing interface
//! - [`crate::file::io`] - Low-level I/O utilities for reading container structures
//!
//! ## Backend Implementations
//! - [`crate::file::physical::Physical`] - Memory-mapped file backend for disk access
//! - [`crate::file::memory::Memory`] - In-memory buffer backend
//!
//! # Examples
//!
//! ## Loading from File
//!
//! ```rust,no_run
//! use au3scope::File;
//! use std::path::Path;
//!
//! let file = File::from_file(Path::new("packed.exe"))?;
//! println!("Loaded {} bytes", file.len());
//! # Ok::<(), au3scope::Error>(())
//! ```
//!
//! ## Loading from Memory
//!
//! ```rust
//! use au3scope::File;
//!
//! let data = vec![0x4D, 0x5A, 0x90, 0x00];
//! let file = File::from_mem(data)?;
//! assert_eq!(file.len(), 4);
//! # Ok::<(), au3scope::Error>(())
//! ```

pub mod io;
pub mod parser;

mod memory;
mod physical;

use std::path::Path;

use crate::Result;

/// Backend trait for file data sources.
///
/// Abstracts over memory-mapped files and owned buffers so the extraction
/// pipeline can treat both uniformly.
pub trait Backend: Send + Sync {
    /// Access the full underlying data.
    fn data(&self) -> &[u8];

    /// The total length of the underlying data in bytes.
    fn len(&self) -> usize;

    /// Returns `true` if the underlying data is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The input file to be analyzed, abstracted over its data source.
///
/// `File` owns the raw bytes of a packed executable or `.a3x` container and
/// hands out immutable views of them. It performs no interpretation itself;
/// the signature scanner and record parser operate on the returned slices.
///
/// # Examples
///
/// ```rust
/// use au3scope::File;
///
/// let file = File::from_mem(vec![0u8; 16])?;
/// assert_eq!(file.len(), 16);
/// assert!(!file.is_empty());
/// # Ok::<(), au3scope::Error>(())
/// ```
pub struct File {
    /// The data source holding the raw input bytes
    data: Box<dyn Backend>,
}

impl File {
    /// Load an input file from disk via memory mapping.
    ///
    /// # Arguments
    /// * `file` - Path of the file to load
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened or mapped,
    /// [`crate::Error::Empty`] if it contains no data.
    pub fn from_file(file: &Path) -> Result<File> {
        File::load(physical::Physical::new(file)?)
    }

    /// Load an input file from an in-memory buffer.
    ///
    /// # Arguments
    /// * `data` - The buffer holding the raw input
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] if the buffer contains no data.
    pub fn from_mem(data: Vec<u8>) -> Result<File> {
        File::load(memory::Memory::new(data))
    }

    fn load<T: Backend + 'static>(data: T) -> Result<File> {
        if data.is_empty() {
            return Err(crate::Error::Empty);
        }

        Ok(File {
            data: Box::new(data),
        })
    }

    /// The total length of the input in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the input holds no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Access the raw bytes of the input.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.data.data()
    }
}
