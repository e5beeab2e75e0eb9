//! # au3scope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the au3scope library. Import this module to get quick access to the essential
//! types for script extraction.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all au3scope operations
pub use crate::Error;

/// The result type used throughout au3scope
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Main entry point for script extraction
pub use crate::Au3Object;

/// Low-level file parsing utilities
pub use crate::{File, Parser};

// ================================================================================================
// Resources and Pipeline State
// ================================================================================================

/// One decoded resource record
pub use crate::script::resource::{Resource, ResourceKind, ResourceStatus, SourceState};

/// Payload checksum helper
pub use crate::script::checksum;

// ================================================================================================
// Cipher Selection
// ================================================================================================

/// Cipher variant and key schedule types
pub use crate::keys::{CipherVariant, KeySchedule, SeedMode};

// ================================================================================================
// Formatter Boundary
// ================================================================================================

/// The external source-formatter interface and implementations
pub use crate::format::{FormatOptions, IdentityFormatter, SourceFormatter, TidyFormatter};

/// Container location results
pub use crate::scanner::{ContainerSpan, Located};
