//! Assembly of the output VCF: rewritten meta lines, the column header row, then records.

use crate::{
    constants::{
        BEDPE_SAMPLE_OFFSET, HEADER_PREFIX, META_PREFIX, VCF_FILEFORMAT_VERSION,
        VCF_FIXED_COLUMNS, VCF_FORMAT_COLUMN,
    },
    core::vcf_record::VcfRecord,
    utils::util::Result,
};
use std::io::Write;

/// Rewrites `##fileformat` and `##fileDate`, leaving every other meta line as-is.
pub fn rewrite_meta_line(line: &str, file_date: &str) -> String {
    match line.split('=').next() {
        Some("##fileformat") => format!("##fileformat={VCF_FILEFORMAT_VERSION}"),
        Some("##fileDate") => format!("##fileDate={file_date}"),
        _ => line.to_string(),
    }
}

pub fn current_file_date() -> String {
    chrono::Local::now().format("%Y%m%d").to_string()
}

pub struct DocumentAssembler<W: Write> {
    out: W,
    file_date: String,
    meta_lines: Vec<String>,
    samples: Vec<String>,
    header_written: bool,
}

impl<W: Write> DocumentAssembler<W> {
    pub fn new(out: W) -> Self {
        Self::with_file_date(out, current_file_date())
    }

    pub fn with_file_date(out: W, file_date: String) -> Self {
        Self {
            out,
            file_date,
            meta_lines: Vec::new(),
            samples: Vec::new(),
            header_written: false,
        }
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    /// Takes a header line while the header is still open.
    ///
    /// Returns false for data lines and for anything seen after the header was written.
    pub fn capture_header_line(&mut self, line: &str) -> bool {
        if self.header_written {
            return false;
        }
        if line.starts_with(META_PREFIX) {
            self.meta_lines
                .push(rewrite_meta_line(line, &self.file_date));
            true
        } else if line.starts_with(HEADER_PREFIX) {
            self.samples = line
                .trim_end()
                .split('\t')
                .skip(BEDPE_SAMPLE_OFFSET)
                .map(|s| s.to_string())
                .collect();
            log::debug!("Captured {} sample name(s)", self.samples.len());
            true
        } else {
            false
        }
    }

    pub fn column_header(&self, has_format: bool) -> String {
        let mut columns: Vec<&str> = VCF_FIXED_COLUMNS.to_vec();
        if has_format || !self.samples.is_empty() {
            columns.push(VCF_FORMAT_COLUMN);
        }
        columns.extend(self.samples.iter().map(String::as_str));
        columns.join("\t")
    }

    /// Writes meta lines and the column header row, once.
    pub fn write_header(&mut self, has_format: bool) -> Result<()> {
        if self.header_written {
            return Ok(());
        }
        for line in &self.meta_lines {
            writeln!(self.out, "{line}")?;
        }
        let column_header = self.column_header(has_format);
        writeln!(self.out, "{column_header}")?;
        self.header_written = true;
        Ok(())
    }

    pub fn write_record(&mut self, record: &VcfRecord) -> Result<()> {
        writeln!(self.out, "{record}")?;
        Ok(())
    }

    /// Emits the header for input without data lines and hands back the sink.
    pub fn finish(mut self) -> Result<W> {
        self.write_header(false)?;
        self.out.flush()?;
        Ok(self.out)
    }
}
