use thiserror::Error;

#[allow(unused_macros)]
macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers every failure mode of the extraction pipeline: locating the embedded
/// script container, decoding its resource records, expanding compressed payloads, and the
/// hand-off to the external source formatter.
///
/// # Error Categories
///
/// ## Container Location and Parsing
/// - [`Error::ScriptNotFound`] - No embedded script container in the input
/// - [`Error::UnsupportedVariant`] - Subtype marker not recognized
/// - [`Error::InvalidCompressedSize`] - Record declares a payload larger than its container
/// - [`Error::InvalidCompressedHeader`] - Compressed payload carries an unknown magic
///
/// ## File Parsing Infrastructure
/// - [`Error::OutOfBounds`] - Attempted to read beyond buffer boundaries
/// - [`Error::Malformed`] - Corrupted or invalid structure
/// - [`Error::Empty`] - Empty input provided
///
/// ## I/O and External Errors
/// - [`Error::FileError`] - Filesystem I/O errors
/// - [`Error::Formatter`] - The external source formatter failed
///
/// # Examples
///
/// ```rust
/// use au3scope::{Au3Object, Error};
///
/// match Au3Object::from_mem(vec![0u8; 64]) {
///     Ok(obj) => println!("found {} resources", obj.resources().len()),
///     Err(Error::ScriptNotFound) => eprintln!("no embedded script"),
///     Err(e) => eprintln!("error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// No embedded script container could be located in the input.
    ///
    /// Raised when the XOR sweep finds no header pattern under any single-byte key,
    /// or when none of the located candidates yields at least one valid record.
    /// This is fatal for the whole file; no partial results are produced.
    #[error("No embedded AutoIt script found")]
    ScriptNotFound,

    /// The container's subtype marker selects no known cipher variant.
    ///
    /// The associated value is the marker string as read from the container.
    /// Parsing of the file aborts; records from other containers are discarded.
    #[error("Unsupported AutoIt subtype - {0}")]
    UnsupportedVariant(String),

    /// A record declared a compressed payload at least as large as its container.
    ///
    /// This is fatal for the container being unpacked; the whole file fails.
    #[error("Invalid size of compressed resource")]
    InvalidCompressedSize,

    /// A compressed payload does not begin with a recognized magic signature.
    ///
    /// Local to one record: the record stays listed but its payload cannot be
    /// decoded any further.
    #[error("Invalid compressed file format")]
    InvalidCompressedHeader,

    /// An out of bound access was attempted while parsing the file.
    ///
    /// Safety check to prevent buffer overruns when reading malformed or
    /// truncated data.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// The file is damaged and could not be parsed.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Provided input was empty.
    #[error("Provided input was empty")]
    Empty,

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur during file operations
    /// such as reading from disk, permission issues, or filesystem errors.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// The external source formatter could not be started or did not succeed.
    ///
    /// Callers running the full pipeline swallow this error and fall back to
    /// the un-indented decompiled text.
    #[error("Source formatter failed - {0}")]
    Formatter(String),

    /// Generic error for miscellaneous failures.
    #[error("{0}")]
    Error(String),
}
