//! Configuration options for decoding.
//!
//! - [`DecodeOptions`]: recursion limit and assignment-prefix handling
//!
//! ## Examples
//!
//! ```rust
//! use serde_luatable::{load_with_options, DecodeOptions, Value};
//!
//! // Saved-settings files start with `VarName = `
//! let options = DecodeOptions::new().with_strip_assignment(true);
//! let value = load_with_options("MyAddonDB = { enabled = true }", &options).unwrap();
//! assert_eq!(value.get("enabled"), Some(&Value::Bool(true)));
//! ```

/// Default limit on table nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for the decoder.
///
/// # Examples
///
/// ```rust
/// use serde_luatable::DecodeOptions;
///
/// let options = DecodeOptions::new();
/// assert_eq!(options.max_depth, 128);
/// assert!(!options.strip_assignment);
///
/// let options = DecodeOptions::saved_variables().with_max_depth(32);
/// assert!(options.strip_assignment);
/// assert_eq!(options.max_depth, 32);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Tables nested deeper than this fail to decode.
    pub max_depth: usize,
    /// Skip a leading `Identifier =` before the literal.
    pub strip_assignment: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            strip_assignment: false,
        }
    }
}

impl DecodeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for whole saved-settings files (`VarName = { ... }`).
    #[must_use]
    pub fn saved_variables() -> Self {
        DecodeOptions {
            strip_assignment: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_strip_assignment(mut self, strip: bool) -> Self {
        self.strip_assignment = strip;
        self
    }
}
