pub const VCF_FILEFORMAT_VERSION: &str = "VCFv4.2";
pub const REF_BASE: &str = "N";

/// Placeholder written into an INFO column when that mate's call was not available.
pub const MISSING_MATE_SENTINEL: &str = "MISSING";

pub const META_PREFIX: &str = "##";
pub const HEADER_PREFIX: char = '#';

pub const BEDPE_FIXED_COLUMNS: usize = 12;
// Fixed columns plus the two mate INFO columns
pub const BEDPE_MIN_FIELDS: usize = BEDPE_FIXED_COLUMNS + 2;
// Fixed columns, both INFO columns and FORMAT
pub const BEDPE_SAMPLE_OFFSET: usize = 15;

pub const VCF_FIXED_COLUMNS: [&str; 8] = [
    "#CHROM", "POS", "ID", "REF", "ALT", "QUAL", "FILTER", "INFO",
];
pub const VCF_FORMAT_COLUMN: &str = "FORMAT";

// Columns of a VCF line kept whole when pasting; everything past is sample data
pub const PASTE_MAX_SPLIT: usize = 9;
pub const VCF_QUAL_COLUMN: usize = 5;
pub const VCF_FORMAT_COLUMN_INDEX: usize = 8;

pub const MATE1_SUFFIX: &str = "_1";
pub const MATE2_SUFFIX: &str = "_2";
pub const SECONDARY_FLAG: &str = "SECONDARY";
