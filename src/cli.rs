use crate::core::breakend::{EmitOptions, MateIdMode};
use anyhow::{anyhow, Result};
use chrono::Datelike;
use clap::{ArgAction, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// Full version string including the crate version and git description.
///
/// # Examples
/// * `0.1.0-1ba958a-dirty` - while on a dirty branch
/// * `0.1.0-1ba958a` - with a fresh commit
pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    let git_describe = env!("VERGEN_GIT_DESCRIBE");
    if git_describe.is_empty() {
        env!("CARGO_PKG_VERSION").to_string()
    } else {
        format!("{}-{}", env!("CARGO_PKG_VERSION"), git_describe)
    }
});

#[derive(Parser, Debug)]
#[command(name="bedpe2vcf",
          author="Tom Mokveld <tmokveld@pacificbiosciences.com>",
          version=&**FULL_VERSION,
          about="Convert paired-breakend structural variant calls from BEDPE to VCF",
          long_about = None,
          after_help = format!("Copyright (C) 2004-{}     Pacific Biosciences of California, Inc.
          This program comes with ABSOLUTELY NO WARRANTY; it is intended for
          Research Use Only and not for use in diagnostic procedures.", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{author}{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true
    )]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a BEDPE file to VCF
    Convert(ConvertArgs),
    /// Paste VCFs from multiple samples
    Paste(PasteArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Convert(_) => "convert",
            Command::Paste(_) => "paste",
        }
    }

    /// True when `convert` would read standard input from an interactive terminal.
    pub fn needs_usage(&self, stdin_is_terminal: bool) -> bool {
        match self {
            Command::Convert(args) => args.bedpe.is_none() && stdin_is_terminal,
            Command::Paste(_) => false,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct ConvertArgs {
    /// BEDPE input [default: standard input]
    #[arg(
        short = 'b',
        long = "bedpe",
        value_name = "BEDPE",
        value_parser = check_file_exists
    )]
    pub bedpe: Option<PathBuf>,

    /// Write output to a file [default: standard output]
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        value_parser = check_prefix_path
    )]
    pub output: Option<String>,

    /// Identifier written to MATEID of the secondary breakend
    #[arg(
        long = "mate-id",
        value_name = "MODE",
        value_enum,
        default_value_t = MateIdMode::Own,
        help_heading = "Advanced"
    )]
    pub mate_id: MateIdMode,
}

impl ConvertArgs {
    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            mate_id: self.mate_id,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(arg_required_else_help(true))]
pub struct PasteArgs {
    /// Line-delimited list of VCF files to paste
    #[arg(
        short = 'f',
        long = "vcf-list",
        value_name = "VCF_LIST",
        value_parser = check_file_exists
    )]
    pub vcf_list: PathBuf,

    /// VCF file to set first 8 columns of variant info [default: first file in VCF_LIST]
    #[arg(
        short = 'm',
        long = "master",
        value_name = "VCF",
        value_parser = check_file_exists
    )]
    pub master: Option<PathBuf>,

    /// Sum QUAL scores of input VCFs as output QUAL score
    #[arg(short = 'q', long = "sum-quals")]
    pub sum_quals: bool,

    /// Write output to a file [default: standard output]
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        value_parser = check_prefix_path
    )]
    pub output: Option<String>,
}

/// Initializes the verbosity level for logging based on the command-line arguments.
///
/// Sets up the logger with a specific verbosity level that is determined
/// by the number of occurrences of the `-v` or `--verbose` flag in the command-line arguments.
/// All log output goes to standard error, apart from converted records.
pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.module_path().unwrap_or("unknown_module"),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

/// Checks if the provided file path exists.
fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        return Err(anyhow!("File does not exist: {}", path.display()));
    }
    Ok(path.to_path_buf())
}

fn check_prefix_path(s: &str) -> Result<String> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(anyhow!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_convert_defaults() {
        let cli = Cli::try_parse_from(["bedpe2vcf", "convert"]).unwrap();
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert!(args.bedpe.is_none());
        assert!(args.output.is_none());
        assert_eq!(args.mate_id, MateIdMode::Own);
        assert_eq!(cli.verbosity, 0);
    }

    #[test]
    fn test_convert_options() {
        let input = NamedTempFile::new().unwrap();
        let input_path = input.path().to_str().unwrap();
        let cli = Cli::try_parse_from([
            "bedpe2vcf", "-vv", "convert", "-b", input_path, "-o", "out.vcf", "--mate-id", "mate",
        ])
        .unwrap();
        assert_eq!(cli.verbosity, 2);
        assert_eq!(cli.command.name(), "convert");
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.bedpe.as_deref(), Some(input.path()));
        assert_eq!(args.output.as_deref(), Some("out.vcf"));
        assert_eq!(args.emit_options().mate_id, MateIdMode::Mate);
    }

    #[test]
    fn test_missing_input_file_is_rejected() {
        let err = Cli::try_parse_from(["bedpe2vcf", "convert", "-b", "/definitely/not/here.bedpe"]);
        assert!(err.is_err());
    }

    #[test]
    fn test_output_parent_must_exist() {
        let err = Cli::try_parse_from(["bedpe2vcf", "convert", "-o", "/no/such/dir/out.vcf"]);
        assert!(err.is_err());
    }

    #[test]
    fn test_paste_args() {
        let list = NamedTempFile::new().unwrap();
        let list_path = list.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["bedpe2vcf", "paste", "-f", list_path, "-q"]).unwrap();
        let Command::Paste(args) = cli.command else {
            panic!("expected paste");
        };
        assert_eq!(args.vcf_list, list.path());
        assert!(args.sum_quals);
        assert!(args.master.is_none());
    }

    #[test]
    fn test_needs_usage_only_for_convert_on_terminal() {
        let convert = Cli::try_parse_from(["bedpe2vcf", "convert"]).unwrap().command;
        assert!(convert.needs_usage(true));
        assert!(!convert.needs_usage(false));

        let input = NamedTempFile::new().unwrap();
        let with_input = Cli::try_parse_from([
            "bedpe2vcf",
            "convert",
            "-b",
            input.path().to_str().unwrap(),
        ])
        .unwrap()
        .command;
        assert!(!with_input.needs_usage(true));

        let paste = Cli::try_parse_from(["bedpe2vcf", "paste", "-f", input.path().to_str().unwrap()])
            .unwrap()
            .command;
        assert!(!paste.needs_usage(true));
    }
}
