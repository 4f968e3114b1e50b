use crate::utils::util::Result;
use flate2::{write::GzEncoder, Compression};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    Vcf,
    VcfGz,
}

enum Sink {
    Plain(BufWriter<Box<dyn Write>>),
    Gzip(GzEncoder<BufWriter<File>>),
}

pub struct VcfWriter {
    sink: Sink,
}

impl VcfWriter {
    fn infer_output_type_from_extension(path: &str) -> OutputType {
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".gz") || path_lower.ends_with(".bgz") {
            OutputType::VcfGz
        } else {
            OutputType::Vcf
        }
    }

    /// Writes to `output`, or standard output when unset.
    pub fn new(output: Option<&str>) -> Result<Self> {
        let sink = match output {
            Some(path) => {
                let file = File::create(path).map_err(|e| {
                    crate::conv_error!("Failed to create output file {}: {}", path, e)
                })?;
                let output_type = Self::infer_output_type_from_extension(path);
                log::debug!("Writer: {:?} output to {}", output_type, path);
                match output_type {
                    OutputType::Vcf => {
                        Sink::Plain(BufWriter::new(Box::new(file) as Box<dyn Write>))
                    }
                    OutputType::VcfGz => Sink::Gzip(GzEncoder::new(
                        BufWriter::new(file),
                        Compression::default(),
                    )),
                }
            }
            None => Sink::Plain(BufWriter::new(Box::new(io::stdout().lock()) as Box<dyn Write>)),
        };
        Ok(VcfWriter { sink })
    }

    /// Flushes buffered output and closes any gzip stream.
    pub fn finish(self) -> Result<()> {
        match self.sink {
            Sink::Plain(mut writer) => writer.flush()?,
            Sink::Gzip(encoder) => encoder.finish()?.flush()?,
        }
        Ok(())
    }
}

impl Write for VcfWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.sink {
            Sink::Plain(writer) => writer.write(buf),
            Sink::Gzip(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.sink {
            Sink::Plain(writer) => writer.flush(),
            Sink::Gzip(encoder) => encoder.flush(),
        }
    }
}
