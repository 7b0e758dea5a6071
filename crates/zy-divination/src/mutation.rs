//! Deriving the resulting hexagram from the changing lines.

use zy_core::{Catalog, CoreResult, Hexagram, LineValue};

/// Derive the resulting hexagram, or `None` when no line changes.
///
/// Every changing line flips its polarity; the settled six-line vector is
/// then resolved against the catalog. Each position flips at most once, so
/// the result differs from the primary whenever any line changes.
pub fn mutate(catalog: &Catalog, lines: &[LineValue; 6]) -> CoreResult<Option<Hexagram>> {
    if !lines.iter().any(|line| line.is_changing()) {
        return Ok(None);
    }
    let settled = lines.map(|line| line.settled().is_yang());
    Ok(Some(catalog.hexagram_by_lines(&settled)?.clone()))
}
