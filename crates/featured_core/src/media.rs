//! Media records returned by the content site.

use serde::{Deserialize, Serialize};

/// An uploaded media asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Numeric media identifier
    pub id: u64,
}
