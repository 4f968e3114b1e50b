use super::{info::InfoField, svtype::SvType};
use crate::{
    constants::{BEDPE_FIXED_COLUMNS, BEDPE_MIN_FIELDS, MISSING_MATE_SENTINEL},
    error::ConvError,
    utils::util::{format_float, Result},
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    Forward,
    Reverse,
}

impl std::str::FromStr for Strand {
    type Err = ConvError;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Strand::Forward),
            "-" => Ok(Strand::Reverse),
            _ => Err(ConvError::InvalidStrand {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}

/// BEDPE score column: numeric when the token is all digits, otherwise kept as written.
#[derive(Debug, Clone, PartialEq)]
pub enum Score {
    Numeric(f64),
    Text(String),
}

impl Score {
    pub fn parse(token: &str) -> Result<Self> {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Score::Numeric(token.parse::<f64>()?))
        } else {
            Ok(Score::Text(token.to_string()))
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Numeric(value) => write!(f, "{}", format_float(*value)),
            Score::Text(text) => write!(f, "{text}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    None,
    Mate1Missing,
    Mate2Missing,
}

/// Receives non-fatal findings made while parsing records.
pub trait DiagnosticReporter {
    fn svtype_mismatch(&mut self, id: &str, column: &str, info: &SvType);
}

/// Sends diagnostics to the log (stderr), keeping a tally for the run summary.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter {
    pub svtype_mismatches: usize,
}

impl DiagnosticReporter for LogReporter {
    fn svtype_mismatch(&mut self, id: &str, column: &str, info: &SvType) {
        self.svtype_mismatches += 1;
        log::warn!(
            "SVTYPE at Column 11({column}) and SVTYPE in INFO Column({info}) don't match at variant ID {id}"
        );
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BedpeRecord {
    pub chrom1: String,
    pub start1: i64,
    pub end1: i64,
    pub chrom2: String,
    pub start2: i64,
    pub end2: i64,
    pub name: String,
    pub score: Score,
    pub strand1: Strand,
    pub strand2: Strand,
    pub svtype_column: String,
    pub filter: String,
    pub mate1_info: Option<String>,
    pub mate2_info: Option<String>,
    /// INFO used for emission: mate1's column, or mate2's when mate1 is MISSING.
    pub info: InfoField,
    /// Authoritative type, taken from INFO.
    pub svtype: SvType,
    /// FORMAT and sample columns, passed through untouched.
    pub extra_fields: Vec<String>,
}

fn parse_coordinate(value: &str, column: &'static str) -> Result<i64> {
    value.parse::<i64>().map_err(|_| ConvError::InvalidInteger {
        column,
        value: value.to_string(),
    })
}

fn mate_info(field: &str) -> Option<String> {
    (field != MISSING_MATE_SENTINEL).then(|| field.to_string())
}

impl BedpeRecord {
    pub fn parse(line: &str, reporter: &mut dyn DiagnosticReporter) -> Result<Self> {
        let fields: Vec<&str> = line.trim_end().split('\t').collect();
        if fields.len() < BEDPE_MIN_FIELDS {
            return Err(ConvError::TooFewFields {
                expected: BEDPE_MIN_FIELDS,
                found: fields.len(),
            });
        }

        let name = fields[6].to_string();
        let mate1_info = mate_info(fields[BEDPE_FIXED_COLUMNS]);
        let mate2_info = mate_info(fields[BEDPE_FIXED_COLUMNS + 1]);
        let info = match (&mate1_info, &mate2_info) {
            (Some(info), _) | (None, Some(info)) => InfoField::parse(info),
            (None, None) => return Err(ConvError::BothMatesMissing { id: name }),
        };

        let svtype_column = fields[10].to_string();
        let svtype = info
            .svtype()
            .ok_or_else(|| ConvError::MissingSvtype { id: name.clone() })?;
        if svtype.to_string() != svtype_column {
            reporter.svtype_mismatch(&name, &svtype_column, &svtype);
        }

        Ok(BedpeRecord {
            chrom1: fields[0].to_string(),
            start1: parse_coordinate(fields[1], "start1")?,
            end1: parse_coordinate(fields[2], "end1")?,
            chrom2: fields[3].to_string(),
            start2: parse_coordinate(fields[4], "start2")?,
            end2: parse_coordinate(fields[5], "end2")?,
            name,
            score: Score::parse(fields[7])?,
            strand1: fields[8].parse()?,
            strand2: fields[9].parse()?,
            svtype_column,
            filter: fields[11].to_string(),
            mate1_info,
            mate2_info,
            info,
            svtype,
            extra_fields: fields[BEDPE_MIN_FIELDS..]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        })
    }

    pub fn malformation(&self) -> Malformation {
        match (&self.mate1_info, &self.mate2_info) {
            (None, _) => Malformation::Mate1Missing,
            (_, None) => Malformation::Mate2Missing,
            _ => Malformation::None,
        }
    }

    pub fn has_format(&self) -> bool {
        !self.extra_fields.is_empty()
    }
}
