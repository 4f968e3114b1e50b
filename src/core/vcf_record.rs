use super::{bedpe::Score, info::InfoField};
use crate::constants::REF_BASE;
use std::fmt;

/// One emitted VCF data line.
#[derive(Debug, Clone, PartialEq)]
pub struct VcfRecord {
    pub chrom: String,
    pub pos: i64,
    pub id: String,
    pub ref_base: &'static str,
    pub alt: String,
    pub qual: Score,
    pub filter: String,
    pub info: InfoField,
    /// FORMAT and sample columns
    pub extra_fields: Vec<String>,
}

impl VcfRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        chrom: &str,
        pos: i64,
        id: String,
        alt: String,
        qual: &Score,
        filter: &str,
        info: InfoField,
        extra_fields: &[String],
    ) -> Self {
        Self {
            chrom: chrom.to_string(),
            pos,
            id,
            ref_base: REF_BASE,
            alt,
            qual: qual.clone(),
            filter: filter.to_string(),
            info,
            extra_fields: extra_fields.to_vec(),
        }
    }
}

impl fmt::Display for VcfRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.chrom, self.pos, self.id, self.ref_base, self.alt, self.qual, self.filter, self.info
        )?;
        for field in &self.extra_fields {
            write!(f, "\t{field}")?;
        }
        Ok(())
    }
}
