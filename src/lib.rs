pub mod cli;
pub mod commands;
pub mod error;

pub mod core {
    pub mod bedpe;
    pub mod breakend;
    pub mod info;
    pub mod position;
    pub mod recovery;
    pub mod svtype;
    pub mod vcf_record;
}

pub mod io {
    pub mod readers;
    pub mod vcf_document;
    pub mod vcf_writer;
}

pub mod utils {
    pub mod util;
}

pub mod constants;

pub use constants::*;
