//! Vertical space distribution.

/// Computes top positions for consecutive blocks of the given `heights`.
///
/// Gaps are at least `min_gap` (raised to 1). When the blocks and minimum
/// gaps fit in `available`, the whole remaining space is split evenly across
/// the gaps, rounded down so the last block still ends inside `available`.
/// Otherwise every gap is `min_gap` and the result overflows.
pub fn allocate(heights: &[u32], min_gap: u32, available: u32) -> Vec<u32> {
    let min_gap = u64::from(min_gap.max(1));
    let gaps = heights.len().saturating_sub(1) as u64;
    let total_heights: u64 = heights.iter().map(|h| u64::from(*h)).sum();
    let spacing_height = gaps * min_gap;
    let required = total_heights + spacing_height;

    let mut spacing = min_gap;
    if gaps > 0 && u64::from(available) > required {
        let extra = u64::from(available) - required;
        spacing = (spacing_height + extra) / gaps;
    }

    let mut positions = Vec::with_capacity(heights.len());
    let mut y = 0u64;
    for height in heights {
        positions.push(u32::try_from(y).unwrap_or(u32::MAX));
        y += u64::from(*height) + spacing;
    }
    positions
}
