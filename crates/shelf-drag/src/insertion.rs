//! Insertion index calculation
//!
//! Maps a horizontal pointer offset over the strip to the slot the dragged
//! tab would occupy if released there.

/// Index in `[0, widths.len()]` for a pointer `offset` measured from the
/// strip's left edge.
///
/// Widths are the live tab widths in display order with the dragged tab
/// still in its pre-drag slot. The candidate is the first tab whose trailing
/// edge lies strictly beyond the offset, so a pointer anywhere over a tab,
/// midpoint included, resolves to that tab and a shared edge resolves to the
/// tab on its right. Offsets past the last tab yield `widths.len()`; negative
/// or NaN offsets yield `0`.
pub fn insertion_index(widths: &[f64], offset: f64) -> usize {
    if offset.is_nan() || offset <= 0.0 {
        return 0;
    }

    let mut accumulated = 0.0;
    for (index, width) in widths.iter().enumerate() {
        let trailing = accumulated + width.max(0.0);
        if offset < trailing {
            return index;
        }
        accumulated = trailing;
    }

    widths.len()
}

/// Horizontal position of the insertion marker, relative to the strip's
/// left edge, for a tab dragged from `origin` towards `candidate`.
///
/// Moving left the marker sits on the leading edge of the candidate tab,
/// moving right on its trailing edge. With no movement it marks the origin.
pub fn marker_offset(widths: &[f64], origin: usize, candidate: usize) -> f64 {
    let edge = |end: usize| -> f64 {
        widths
            .iter()
            .take(end.min(widths.len()))
            .map(|w| w.max(0.0))
            .sum()
    };

    if candidate > origin {
        let last = widths.len().saturating_sub(1);
        edge(candidate.min(last) + 1)
    } else {
        edge(candidate)
    }
}
