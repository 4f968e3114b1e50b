use crate::{
    cli::PasteArgs,
    constants::{META_PREFIX, PASTE_MAX_SPLIT, VCF_FORMAT_COLUMN_INDEX, VCF_QUAL_COLUMN},
    error::ConvError,
    io::{readers::open_text_reader, vcf_writer::VcfWriter},
    utils::util::{format_float, Result},
};
use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

struct PasteInput {
    path: PathBuf,
    reader: Box<dyn BufRead>,
}

impl PasteInput {
    fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            path: path.to_path_buf(),
            reader: Box::new(open_text_reader(path)?),
        })
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end().to_string()))
    }
}

/// Running QUAL total; `.` values are skipped.
#[derive(Debug, Default)]
struct QualSum {
    total: Option<f64>,
}

impl QualSum {
    fn add(&mut self, qual: Option<&str>) -> Result<()> {
        match qual {
            None | Some(".") => Ok(()),
            Some(value) => {
                let value: f64 = value.parse()?;
                self.total = Some(self.total.unwrap_or(0.0) + value);
                Ok(())
            }
        }
    }

    fn render(&self) -> String {
        self.total.map_or_else(|| ".".to_string(), format_float)
    }
}

fn split_vcf_line(line: &str) -> Vec<&str> {
    line.splitn(PASTE_MAX_SPLIT + 1, '\t').collect()
}

/// Reads VCF paths, one per line, skipping blank and `#` comment lines.
pub fn read_vcf_paths_from_file(path: &Path) -> Result<Vec<PathBuf>> {
    let file = File::open(path).map_err(|e| {
        crate::conv_error!("Failed to open VCF list file {}: {}", path.display(), e)
    })?;
    let reader = BufReader::new(file);

    let mut paths = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line =
            line.map_err(|e| crate::conv_error!("Error reading line {}: {}", line_num + 1, e))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let path = PathBuf::from(trimmed);
        if !path.exists() {
            return Err(crate::conv_error!("VCF file does not exist: {}", path.display()));
        }
        paths.push(path);
    }

    if paths.is_empty() {
        return Err(crate::conv_error!("No VCF paths found in {}", path.display()));
    }
    Ok(paths)
}

fn write_header<W: Write>(inputs: &mut [PasteInput], out: &mut W) -> Result<()> {
    let (master, others) = inputs
        .split_first_mut()
        .ok_or_else(|| crate::conv_error!("No VCF files to paste"))?;

    let mut column_line = String::new();
    while let Some(line) = master.next_line()? {
        if !line.starts_with(META_PREFIX) {
            column_line = line;
            break;
        }
        writeln!(out, "{line}")?;
    }
    let mut columns: Vec<&str> = split_vcf_line(&column_line)
        .into_iter()
        .take(PASTE_MAX_SPLIT)
        .collect();

    let mut sample_columns = Vec::with_capacity(others.len());
    for input in others.iter_mut() {
        while let Some(line) = input.next_line()? {
            if line.starts_with(META_PREFIX) {
                continue;
            }
            if line.starts_with('#') {
                sample_columns.push(line);
                break;
            }
        }
    }
    for line in &sample_columns {
        if let Some(samples) = split_vcf_line(line).get(PASTE_MAX_SPLIT).copied() {
            columns.push(samples);
        }
    }

    writeln!(out, "{}", columns.join("\t"))?;
    Ok(())
}

fn write_variants<W: Write>(inputs: &mut [PasteInput], sum_quals: bool, out: &mut W) -> Result<usize> {
    let (master, others) = inputs
        .split_first_mut()
        .ok_or_else(|| crate::conv_error!("No VCF files to paste"))?;

    let mut n_written = 0;
    while let Some(master_line) = master.next_line()? {
        let master_v = split_vcf_line(&master_line);
        let mut out_v: Vec<String> = master_v.iter().take(8).map(|s| s.to_string()).collect();

        let mut qual = QualSum::default();
        if sum_quals {
            qual.add(master_v.get(VCF_QUAL_COLUMN).copied())?;
        }

        for (idx, input) in others.iter_mut().enumerate() {
            let line = input.next_line()?.ok_or_else(|| ConvError::LengthMismatch {
                path: input.path.clone(),
            })?;
            let line_v = split_vcf_line(&line);

            // FORMAT comes from the first sample file, the master may have been reprocessed
            if idx == 0 {
                out_v.push(
                    line_v
                        .get(VCF_FORMAT_COLUMN_INDEX)
                        .copied()
                        .unwrap_or_default()
                        .to_string(),
                );
            }
            if sum_quals {
                qual.add(line_v.get(VCF_QUAL_COLUMN).copied())?;
            }
            if let Some(samples) = line_v.get(PASTE_MAX_SPLIT) {
                out_v.push(samples.to_string());
            }
        }

        if sum_quals && out_v.len() > VCF_QUAL_COLUMN {
            out_v[VCF_QUAL_COLUMN] = qual.render();
        }
        writeln!(out, "{}", out_v.join("\t"))?;
        n_written += 1;
    }
    Ok(n_written)
}

/// Pastes the sample columns of `paths` onto the site columns of the first path.
pub fn paste_files<W: Write>(paths: &[PathBuf], sum_quals: bool, out: &mut W) -> Result<usize> {
    let mut inputs = paths
        .iter()
        .map(|path| PasteInput::open(path))
        .collect::<Result<Vec<_>>>()?;
    write_header(&mut inputs, out)?;
    write_variants(&mut inputs, sum_quals, out)
}

pub fn paste(args: PasteArgs) -> Result<()> {
    let mut paths = read_vcf_paths_from_file(&args.vcf_list)?;
    let master = args.master.clone().unwrap_or_else(|| paths[0].clone());
    paths.insert(0, master);
    log::debug!("Pasting {} VCF file(s), master {}", paths.len(), paths[0].display());

    let mut writer = VcfWriter::new(args.output.as_deref())?;
    let n_written = paste_files(&paths, args.sum_quals, &mut writer)?;
    writer.finish()?;

    log::info!("Pasted {} variant line(s)", n_written);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    const SITES: &str = "##fileformat=VCFv4.2\n##source=test\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n\
chr1\t100\tv1\tN\t<DEL>\t10\tPASS\tSVTYPE=DEL\n\
chr1\t500\tv2\tN\t<DUP>\t.\tPASS\tSVTYPE=DUP\n";

    const SAMPLE_A: &str = "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tA\n\
chr1\t100\tv1\tN\t<DEL>\t5\tPASS\tSVTYPE=DEL;SU=4\tGT:SU\t0/1:4\n\
chr1\t500\tv2\tN\t<DUP>\t7.5\tPASS\tSVTYPE=DUP\tGT:SU\t0/0:0\n";

    const SAMPLE_B: &str = "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tB\tC\n\
chr1\t100\tv1\tN\t<DEL>\t1\tPASS\tSVTYPE=DEL\tGT:SU\t1/1:9\t0/0:0\n\
chr1\t500\tv2\tN\t<DUP>\t2\tPASS\tSVTYPE=DUP\tGT:SU\t0/1:3\t./.:0\n";

    fn write_inputs(files: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
        let temp_dir = tempdir().unwrap();
        let paths = files
            .iter()
            .map(|(name, contents)| {
                let path = temp_dir.path().join(name);
                std::fs::write(&path, contents).unwrap();
                path
            })
            .collect();
        (temp_dir, paths)
    }

    fn run(paths: &[PathBuf], sum_quals: bool) -> Result<String> {
        let mut out = Vec::new();
        paste_files(paths, sum_quals, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_paste_samples() {
        let (_dir, paths) =
            write_inputs(&[("sites.vcf", SITES), ("a.vcf", SAMPLE_A), ("b.vcf", SAMPLE_B)]);
        let output = run(&paths, false).unwrap();
        assert_eq!(
            output.lines().collect::<Vec<_>>(),
            vec![
                "##fileformat=VCFv4.2",
                "##source=test",
                "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tA\tB\tC",
                "chr1\t100\tv1\tN\t<DEL>\t10\tPASS\tSVTYPE=DEL\tGT:SU\t0/1:4\t1/1:9\t0/0:0",
                "chr1\t500\tv2\tN\t<DUP>\t.\tPASS\tSVTYPE=DUP\tGT:SU\t0/0:0\t0/1:3\t./.:0",
            ]
        );
    }

    #[test]
    fn test_paste_sum_quals() {
        let (_dir, paths) =
            write_inputs(&[("sites.vcf", SITES), ("a.vcf", SAMPLE_A), ("b.vcf", SAMPLE_B)]);
        let output = run(&paths, true).unwrap();
        let body: Vec<&str> = output.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(body[0].split('\t').nth(5), Some("16.0"));
        assert_eq!(body[1].split('\t').nth(5), Some("9.5"));
    }

    #[test]
    fn test_paste_length_mismatch() {
        let short = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tA\nchr1\t100\tv1\tN\t<DEL>\t5\tPASS\t.\tGT\t0/1\n";
        let (_dir, paths) = write_inputs(&[("sites.vcf", SITES), ("short.vcf", short)]);
        let err = run(&paths, false).unwrap_err();
        match err {
            ConvError::LengthMismatch { path } => assert!(path.ends_with("short.vcf")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_qual_sum() {
        let mut qual = QualSum::default();
        assert_eq!(qual.render(), ".");
        qual.add(Some(".")).unwrap();
        assert_eq!(qual.render(), ".");
        qual.add(Some("2")).unwrap();
        qual.add(Some("0.5")).unwrap();
        assert_eq!(qual.render(), "2.5");
        assert!(qual.add(Some("high")).is_err());
    }

    #[test]
    fn test_read_vcf_paths_from_file() {
        let (dir, paths) = write_inputs(&[("a.vcf", SAMPLE_A), ("b.vcf", SAMPLE_B)]);
        let list = dir.path().join("list.txt");
        std::fs::write(
            &list,
            format!("# samples\n{}\n\n{}\n", paths[0].display(), paths[1].display()),
        )
        .unwrap();
        assert_eq!(read_vcf_paths_from_file(&list).unwrap(), paths);

        std::fs::write(&list, "\n# nothing\n").unwrap();
        assert!(read_vcf_paths_from_file(&list).is_err());
    }

    #[test]
    fn test_paste_command_with_default_master() {
        let (dir, paths) = write_inputs(&[("a.vcf", SAMPLE_A), ("b.vcf", SAMPLE_B)]);
        let list = dir.path().join("list.txt");
        std::fs::write(&list, format!("{}\n{}\n", paths[0].display(), paths[1].display())).unwrap();
        let output = dir.path().join("pasted.vcf");

        paste(PasteArgs {
            vcf_list: list,
            master: None,
            sum_quals: false,
            output: Some(output.to_string_lossy().into_owned()),
        })
        .unwrap();

        let pasted = std::fs::read_to_string(&output).unwrap();
        let header = pasted.lines().find(|l| l.starts_with("#CHROM")).unwrap();
        assert_eq!(header, "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tA\tB\tC");
    }
}
