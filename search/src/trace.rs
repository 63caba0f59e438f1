//! `SearchTrace`: the expansion log of one search call.
//!
//! Entries are the expanded nodes in expansion order. For a solved search the
//! goal node is the final entry. Counters summarise duplicate handling.

use tileswap_kernel::board::Board;
use tileswap_kernel::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_TRACE};

use crate::node::{FValue, NodeArena, NodeId};

/// One node as it appears in a trace or solution path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    pub board: Board,
    pub depth: u32,
    pub f: FValue,
}

/// Aggregate counters gathered while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Children produced by expansion, duplicates included.
    pub generated: u64,
    /// Children discarded because an equal board was already known.
    pub duplicates_suppressed: u64,
    /// Open entries replaced by a better node for the same board.
    pub replaced: u64,
    /// Closed boards moved back to open with a better f-value.
    pub reopened: u64,
    /// Largest open-set size seen.
    pub frontier_high_water: u64,
}

/// The complete expansion log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTrace {
    pub entries: Vec<TraceEntry>,
    pub stats: TraceStats,
}

impl SearchTrace {
    /// Materialise entries for `expanded` from the arena.
    #[must_use]
    pub fn from_arena(arena: &NodeArena, expanded: &[NodeId], stats: TraceStats) -> Self {
        Self {
            entries: entries_for(arena, expanded),
            stats,
        }
    }

    /// Number of expanded nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Σ of `g + h` over every entry.
    #[must_use]
    pub fn total_cost(&self) -> u64 {
        total_cost(&self.entries)
    }

    /// Serialise the trace to compact JSON with sorted keys.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if serialisation fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json_value())
    }

    /// Domain-separated hash of [`to_canonical_json_bytes`](Self::to_canonical_json_bytes).
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if serialisation fails.
    pub fn digest(&self) -> Result<ContentHash, serde_json::Error> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_TRACE, &bytes))
    }

    /// Convert to a `serde_json::Value`. Object keys serialise sorted.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "entries": self.entries.iter().map(entry_to_json).collect::<Vec<_>>(),
            "stats": {
                "duplicates_suppressed": self.stats.duplicates_suppressed,
                "frontier_high_water": self.stats.frontier_high_water,
                "generated": self.stats.generated,
                "reopened": self.stats.reopened,
                "replaced": self.stats.replaced,
            },
        })
    }
}

/// Materialise `ids` as owned entries.
#[must_use]
pub fn entries_for(arena: &NodeArena, ids: &[NodeId]) -> Vec<TraceEntry> {
    ids.iter()
        .map(|&id| {
            let node = &arena[id];
            TraceEntry {
                board: node.board.clone(),
                depth: node.depth,
                f: node.f,
            }
        })
        .collect()
}

/// Σ of `g + h` over `entries`.
#[must_use]
pub fn total_cost(entries: &[TraceEntry]) -> u64 {
    entries.iter().map(|e| u64::from(e.f.total)).sum()
}

fn entry_to_json(e: &TraceEntry) -> serde_json::Value {
    serde_json::json!({
        "board": e.board.to_string(),
        "depth": e.depth,
        "f": [e.f.total, e.f.h],
        "fingerprint": e.board.fingerprint().hex_digest(),
    })
}
