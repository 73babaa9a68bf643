/// How array indices appear in flattened paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayPaths {
    /// Indices as dotted segments: `a.0`, `a.1`. Matches the historical
    /// behavior of walking arrays with the same generic object iteration
    /// used for mappings.
    #[default]
    Dot,
    /// Indices in brackets: `a[0]`, `a[1]`.
    Bracket,
}

#[derive(Debug, Clone)]
pub struct Options {
    /// Path style for array elements.
    pub array_paths: ArrayPaths,
    /// Maximum container nesting depth before flattening bails out with
    /// `Error::RecursionLimit` (default: 128).
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            array_paths: ArrayPaths::default(),
            max_depth: 128,
        }
    }
}
