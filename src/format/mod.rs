//! The external source-formatter boundary.
//!
//! Recovered script text comes out of the decompiler un-indented. Re-indenting
//! is delegated to an out-of-process tool through a deliberately narrow trait:
//! the pipeline never learns about process spawning or temp-directory layout,
//! and tests substitute an identity formatter.
//!
//! The process-backed implementation hands the tool a temp file plus an
//! options file mirroring the tool's INI dialect, reads the rewritten file
//! back, and removes every artifact it created — also when the tool fails,
//! times out or the call is cancelled mid-flight. Cleanup is best-effort by
//! contract; a temp file that is already gone is not an error.

use std::{
    fs,
    path::PathBuf,
    process::Command,
    sync::atomic::{AtomicU32, Ordering},
};

use crate::Result;

/// Options handed to the source formatter.
///
/// The defaults mirror the settings the original tooling wrote for its
/// bundled formatter: four-space tabs, proper-cased keywords and constants,
/// tidied comment blocks and a normalized trailing newline.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Spaces per indentation level
    pub tab_size: u32,
    /// Proper-case keywords
    pub proper_case: bool,
    /// Proper-case standard constants
    pub proper_case_constants: bool,
    /// Re-align comment blocks
    pub tidy_comment_blocks: bool,
    /// Ensure the output ends with a newline
    pub end_with_newline: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            tab_size: 4,
            proper_case: true,
            proper_case_constants: true,
            tidy_comment_blocks: true,
            end_with_newline: true,
        }
    }
}

/// A fallible source re-indenter.
///
/// The pipeline treats any error as "keep the un-indented text" — no
/// formatter failure ever propagates out of resource processing.
pub trait SourceFormatter {
    /// Rewrite `source` according to `options`.
    ///
    /// # Errors
    /// Implementations surface any failure to produce rewritten text as
    /// [`crate::Error::Formatter`]; callers fall back to `source` unchanged.
    fn format(&self, source: &str, options: &FormatOptions) -> Result<String>;
}

/// Formatter that returns its input unchanged. The test double.
#[derive(Debug, Default)]
pub struct IdentityFormatter;

impl SourceFormatter for IdentityFormatter {
    fn format(&self, source: &str, _options: &FormatOptions) -> Result<String> {
        Ok(source.to_string())
    }
}

static TEMP_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Formatter backed by an external tidy executable.
///
/// The executable is expected to rewrite the script file it is given in
/// place, honoring an INI-style options file in the same directory.
///
/// # Examples
///
/// ```rust,no_run
/// use au3scope::format::{FormatOptions, SourceFormatter, TidyFormatter};
///
/// let tidy = TidyFormatter::new("/opt/au3/tidy");
/// let indented = tidy.format("Func f()\nEndFunc\n", &FormatOptions::default())?;
/// # Ok::<(), au3scope::Error>(())
/// ```
#[derive(Debug)]
pub struct TidyFormatter {
    executable: PathBuf,
}

impl TidyFormatter {
    /// Create a formatter invoking the tool at `executable`.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        TidyFormatter {
            executable: executable.into(),
        }
    }
}

impl SourceFormatter for TidyFormatter {
    fn format(&self, source: &str, options: &FormatOptions) -> Result<String> {
        let dir = std::env::temp_dir();
        let serial = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let script = dir.join(format!("aut{}-{:x}.au3", std::process::id(), serial));
        let ini = dir.join(format!("tidy{}-{:x}.ini", std::process::id(), serial));

        // Guard first: artifacts are removed on every exit path, including
        // panics and cancellation.
        let _cleanup = TempGuard {
            paths: vec![script.clone(), ini.clone()],
        };

        fs::write(&script, source)?;
        fs::write(&ini, render_options(options))?;

        let status = Command::new(&self.executable)
            .arg(&script)
            .arg(&ini)
            .status()
            .map_err(|e| crate::Error::Formatter(e.to_string()))?;
        if !status.success() {
            return Err(crate::Error::Formatter(format!(
                "tidy exited with {}",
                status
            )));
        }

        let rewritten = fs::read_to_string(&script)?;
        let trimmed = rewritten.trim_matches(['\r', '\n']);
        if trimmed.is_empty() {
            return Err(crate::Error::Formatter("tidy produced no output".into()));
        }
        Ok(trimmed.to_string())
    }
}

/// Render the INI options block the external tool consumes.
fn render_options(options: &FormatOptions) -> String {
    let flag = |b: bool| u32::from(b);
    format!(
        "[ProgramSettings]\r\n\
         tabchar={tab}\r\n\
         tabsize={tab}\r\n\
         proper={proper}\r\n\
         properconstants={constants}\r\n\
         delim=1\r\n\
         vars=2\r\n\
         Tidy_commentblock={comments}\r\n\
         End_With_NewLine={newline}\r\n",
        tab = options.tab_size,
        proper = flag(options.proper_case),
        constants = flag(options.proper_case_constants),
        comments = flag(options.tidy_comment_blocks),
        newline = flag(options.end_with_newline),
    )
}

/// Removes its paths on drop, ignoring files that are already gone.
struct TempGuard {
    paths: Vec<PathBuf>,
}

impl Drop for TempGuard {
    fn drop(&mut self) {
        for path in &self.paths {
            let _ = fs::remove_file(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_formatter_echoes() {
        let out = IdentityFormatter
            .format("$a = 1\r\n", &FormatOptions::default())
            .unwrap();
        assert_eq!(out, "$a = 1\r\n");
    }

    #[test]
    fn options_render_as_ini() {
        let ini = render_options(&FormatOptions::default());
        assert!(ini.starts_with("[ProgramSettings]"));
        assert!(ini.contains("tabsize=4"));
        assert!(ini.contains("proper=1"));
        assert!(ini.contains("End_With_NewLine=1"));
    }

    #[test]
    fn missing_executable_is_a_formatter_error() {
        let tidy = TidyFormatter::new("/nonexistent/definitely-not-a-tool");
        let err = tidy
            .format("$a = 1", &FormatOptions::default())
            .unwrap_err();
        assert!(matches!(err, crate::Error::Formatter(_)));
    }

    #[test]
    fn temp_guard_removes_artifacts() {
        let path = std::env::temp_dir().join(format!("guard-test-{}", std::process::id()));
        fs::write(&path, b"x").unwrap();
        {
            let _guard = TempGuard {
                paths: vec![path.clone()],
            };
        }
        assert!(!path.exists());
    }
}
