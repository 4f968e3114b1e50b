use crate::error::{ConvError, ConvResult};
use log;
use std::{fmt::Display, sync::Once};

pub type Result<T> = ConvResult<T>;

#[allow(unused)]
static INIT_LOG: Once = Once::new();

#[allow(unused)]
pub fn init_logger() {
    INIT_LOG.call_once(|| {
        env_logger::builder()
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .init();
    });
}

pub fn handle_error_and_exit(err: impl Display) -> ! {
    log::error!("{err}");
    std::process::exit(1);
}

/// A closed output pipe ends the run quietly; anything else is fatal.
pub fn handle_conv_error_and_exit(err: ConvError) -> ! {
    if err.is_broken_pipe() {
        log::debug!("Output closed by downstream consumer");
        std::process::exit(0);
    }
    handle_error_and_exit(err)
}

/// Renders whole numbers with a trailing `.0` so numeric QUAL values read as floats.
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
