use serde::{Deserialize, Serialize};

/// Default for [`ReaderOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options for the WKB reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    /// The maximum number of nested geometry headers, counting the outermost one.
    ///
    /// WKB usually comes from untrusted storage, so recursion is bounded. Buffers nested deeper
    /// than this fail with [`WkbError::DepthExceeded`](crate::error::WkbError::DepthExceeded).
    ///
    /// Defaults to `64`
    pub max_depth: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
