//! Merge-based inference.
//!
//! This module provides two ways of applying a learned [`MergeList`] to a
//! symbolized word:
//! - Sweep: any learned pair is merged wherever a left-to-right pass meets it,
//!   regardless of rank
//! - Ranked: the lowest-rank pair present is merged first, as in conventional
//!   BPE decoding
//!
//! [`MergeList`]: crate::core::MergeList

pub mod ranked;
pub mod sweep;

pub use ranked::RankedEncoder;
pub use sweep::SweepEncoder;

use serde::{Deserialize, Serialize};

/// How learned merges are applied during tokenization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncodingMode {
    /// Rank-agnostic left-to-right passes until no learned pair remains
    #[default]
    Sweep,
    /// Lowest-rank pair first
    Ranked,
}
