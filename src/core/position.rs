use super::{bedpe::Strand, svtype::SvType};
use crate::{error::ConvError, utils::util::Result};

/// Converts a BEDPE interval start into the 1-based VCF position of a breakend.
///
/// The confidence-interval lower bound (typically negative) is backed out of the
/// padded interval start. Reverse-strand breakends of a BND pair are shifted one
/// base to the right.
pub fn resolve_position(
    start: i64,
    ci_lower: Option<i64>,
    strand: Strand,
    svtype: &SvType,
) -> Result<i64> {
    let ci_lower = ci_lower.unwrap_or(0);
    let shift = i64::from(svtype.is_breakend() && strand == Strand::Reverse);
    start
        .checked_sub(ci_lower)
        .and_then(|pos| pos.checked_add(shift))
        .ok_or(ConvError::PositionOutOfRange {
            start,
            offset: ci_lower,
        })
}
