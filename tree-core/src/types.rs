use std::num::NonZeroU64;

/// Unsigned counter used for every quantity a tree tracks: trunk
/// segments, leaves, fruit and pine levels.
///
/// Counters only ever grow, so arithmetic on them saturates instead of
/// wrapping.
pub type Count = u64;

/// Number of glyphs in a full row of leaves or fruit.
pub const ROW_WIDTH: NonZeroU64 = NonZeroU64::new(3).unwrap();

/// [`ROW_WIDTH`] as a plain counter, for arithmetic on counts.
pub const LEAVES_PER_ROW: Count = ROW_WIDTH.get();
