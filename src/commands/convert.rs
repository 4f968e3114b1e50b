use crate::{
    cli::ConvertArgs,
    core::{
        bedpe::{BedpeRecord, DiagnosticReporter, LogReporter, Malformation},
        breakend::{emit, EmitOptions},
        recovery::apply_recovery,
    },
    io::{readers::open_input_reader, vcf_document::DocumentAssembler, vcf_writer::VcfWriter},
    utils::util::Result,
};
use std::io::{BufRead, Write};


#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    pub records_read: usize,
    pub records_written: usize,
    pub mates_suppressed: usize,
}

/// Streams BEDPE lines from `reader` into VCF on `out`, one record at a time.
pub fn convert_stream<R: BufRead, W: Write>(
    reader: R,
    out: W,
    options: &EmitOptions,
    reporter: &mut dyn DiagnosticReporter,
) -> Result<(W, ConvertStats)> {
    let mut assembler = DocumentAssembler::new(out);
    let mut stats = ConvertStats::default();

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        if assembler.capture_header_line(&line) {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let record = BedpeRecord::parse(&line, reporter).map_err(|e| e.at_line(line_idx + 1))?;
        stats.records_read += 1;
        assembler.write_header(record.has_format())?;

        let malformation = record.malformation();
        let emission = emit(&record, options).map_err(|e| e.at_line(line_idx + 1))?;
        let kept = apply_recovery(emission, malformation);
        if record.svtype.is_breakend() && malformation != Malformation::None {
            log::debug!("{}: {:?}, writing one mate", record.name, malformation);
            stats.mates_suppressed += 1;
        }
        for variant in &kept {
            assembler.write_record(variant)?;
        }
        stats.records_written += kept.len();
    }

    let out = assembler.finish()?;
    Ok((out, stats))
}

pub fn convert(args: ConvertArgs) -> Result<()> {
    let options = args.emit_options();
    log::debug!("Emit options: {:?}", options);

    let reader = open_input_reader(args.bedpe.as_deref())?;
    let writer = VcfWriter::new(args.output.as_deref())?;
    let mut reporter = LogReporter::default();

    let (writer, stats) = convert_stream(reader, writer, &options, &mut reporter)?;
    writer.finish()?;

    log::info!(
        "Converted {} BEDPE record(s) into {} VCF record(s)",
        stats.records_read,
        stats.records_written
    );
    if stats.mates_suppressed > 0 {
        log::info!(
            "Suppressed {} mate(s) flagged MISSING in the input",
            stats.mates_suppressed
        );
    }
    if reporter.svtype_mismatches > 0 {
        log::warn!(
            "{} record(s) had a SVTYPE column that disagreed with INFO",
            reporter.svtype_mismatches
        );
    }
    Ok(())
}
