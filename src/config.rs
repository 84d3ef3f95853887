/// The default maximum nesting depth of objects and lists.
pub const DEFAULT_MAX_DEPTH: usize = 100;
/// The default maximum input size in bytes (10MB).
pub const DEFAULT_MAX_INPUT_LEN: usize = 10 * 1024 * 1024;

/// Limits applied while parsing and evaluating.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Deepest allowed object/list nesting. `{}` is depth 1.
    pub max_depth: usize,
    /// Largest accepted input, in bytes.
    pub max_input_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl Config {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }
}
