use super::{bedpe::Malformation, breakend::Emission, vcf_record::VcfRecord};

/// Drops the mate whose call was flagged MISSING in the input.
///
/// Single-record emissions pass through whatever the malformation state.
pub fn apply_recovery(emission: Emission, malformation: Malformation) -> Vec<VcfRecord> {
    match emission {
        Emission::Single(record) => vec![record],
        Emission::Pair { mate1, mate2 } => match malformation {
            Malformation::None => vec![mate1, mate2],
            Malformation::Mate1Missing => vec![mate2],
            Malformation::Mate2Missing => vec![mate1],
        },
    }
}
