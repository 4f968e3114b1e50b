use super::{
    bedpe::{BedpeRecord, Strand},
    info::{keys, reverse_strands, InfoEntry, InfoField},
    position::resolve_position,
    vcf_record::VcfRecord,
};
use crate::{
    constants::{MATE1_SUFFIX, MATE2_SUFFIX, REF_BASE, SECONDARY_FLAG},
    utils::util::Result,
};

/// Which identifier the secondary mate's MATEID carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MateIdMode {
    /// The secondary mate's own ID (`<name>_2`)
    #[default]
    Own,
    /// The primary mate's ID (`<name>_1`)
    Mate,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmitOptions {
    pub mate_id: MateIdMode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Emission {
    Single(VcfRecord),
    Pair { mate1: VcfRecord, mate2: VcfRecord },
}

/// Bracket notation joining this breakend to its mate at `mate_chrom:mate_pos`.
pub fn bnd_alt(strand: Strand, mate_strand: Strand, mate_chrom: &str, mate_pos: i64) -> String {
    match (strand, mate_strand) {
        (Strand::Forward, Strand::Reverse) => format!("{REF_BASE}[{mate_chrom}:{mate_pos}["),
        (Strand::Forward, Strand::Forward) => format!("{REF_BASE}]{mate_chrom}:{mate_pos}]"),
        (Strand::Reverse, Strand::Forward) => format!("]{mate_chrom}:{mate_pos}]{REF_BASE}"),
        (Strand::Reverse, Strand::Reverse) => format!("[{mate_chrom}:{mate_pos}[{REF_BASE}"),
    }
}

/// Rewrites the primary INFO for the secondary breakend of a pair.
pub fn secondary_mate_info(info: &InfoField, name: &str, options: &EmitOptions) -> InfoField {
    let mut info = info.clone();

    if let Some(strands) = info.strands().map(reverse_strands) {
        info.set(keys::STRANDS, strands);
    }

    if !info.swap_values(keys::CIPOS, keys::CIEND) {
        log::trace!("{name}: CIPOS/CIEND not both present, left unswapped");
    }
    info.swap_values(keys::CIPOS95, keys::CIEND95);

    let mate_id = match options.mate_id {
        MateIdMode::Own => format!("{name}{MATE2_SUFFIX}"),
        MateIdMode::Mate => format!("{name}{MATE1_SUFFIX}"),
    };
    info.set(keys::MATEID, mate_id);

    // Empty token reproduces the `EVENT=x;SECONDARY;` marker layout
    info.insert_after(
        keys::EVENT,
        vec![InfoEntry::flag(SECONDARY_FLAG), InfoEntry::empty()],
    );

    info
}

/// Expands one BEDPE record into its VCF record(s).
pub fn emit(record: &BedpeRecord, options: &EmitOptions) -> Result<Emission> {
    let pos1 = resolve_position(
        record.start1,
        record.info.cipos_lower()?,
        record.strand1,
        &record.svtype,
    )?;

    if !record.svtype.is_breakend() {
        return Ok(Emission::Single(VcfRecord::new(
            &record.chrom1,
            pos1,
            record.name.clone(),
            record.svtype.symbolic_alt(),
            &record.score,
            &record.filter,
            record.info.clone(),
            &record.extra_fields,
        )));
    }

    let pos2 = resolve_position(
        record.start2,
        record.info.ciend_lower()?,
        record.strand2,
        &record.svtype,
    )?;

    let mate1 = VcfRecord::new(
        &record.chrom1,
        pos1,
        format!("{}{MATE1_SUFFIX}", record.name),
        bnd_alt(record.strand1, record.strand2, &record.chrom2, pos2),
        &record.score,
        &record.filter,
        record.info.clone(),
        &record.extra_fields,
    );
    let mate2 = VcfRecord::new(
        &record.chrom2,
        pos2,
        format!("{}{MATE2_SUFFIX}", record.name),
        bnd_alt(record.strand2, record.strand1, &record.chrom1, pos1),
        &record.score,
        &record.filter,
        secondary_mate_info(&record.info, &record.name, options),
        &record.extra_fields,
    );

    Ok(Emission::Pair { mate1, mate2 })
}
