//! Drives the accelerometer backend picked at build time.
//!
//! The backend is chosen with the `bosch` or `stm` cargo feature, exactly one of them must be
//! enabled. The driver itself only knows about the [`Accelerometer`] trait and receives the
//! backend as an explicit argument.
//!
//! A build without a backend is rejected at compile time, check it with
//! `cargo build -p imu-demo --no-default-features` (fails with "No sensor selected!").
pub mod config;

use imu_traits::{write_line, AccelSample, Accelerometer, ImuResult, Settings};
use log::debug;
#[cfg(any(bosch_backend, stm_backend))]
use std::io::{stdout, Stdout, Write};

#[cfg(no_backend)]
compile_error!("No sensor selected! Enable the `bosch` or the `stm` feature of imu-demo.");

#[cfg(both_backends)]
compile_error!(
    "Both sensors selected! Enable only one of the `bosch` and `stm` features of imu-demo \
     (use --no-default-features to drop the default one)."
);

/// Backend compiled into this build.
#[cfg(bosch_backend)]
pub type SelectedAccelerometer<W = Stdout> = imu_bosch::BoschAccelerometer<W>;
#[cfg(stm_backend)]
pub type SelectedAccelerometer<W = Stdout> = imu_stm::StmAccelerometer<W>;

#[cfg(bosch_backend)]
pub const SELECTED_BACKEND: &str = "bosch";
#[cfg(stm_backend)]
pub const SELECTED_BACKEND: &str = "stm";

/// First line printed by the demo before touching the backend.
pub const HEADER: &str = "Testing Selected Accelerometer:";

/// Settings value used when nothing else is configured.
pub const DEFAULT_SETTINGS: Settings = Settings(42);

/// Builds the selected backend printing to stdout.
#[cfg(any(bosch_backend, stm_backend))]
pub fn selected_backend() -> SelectedAccelerometer {
    SelectedAccelerometer::<Stdout>::with_output(stdout())
}

/// Builds the selected backend printing to `out`.
#[cfg(any(bosch_backend, stm_backend))]
pub fn selected_backend_with<W: Write>(out: W) -> SelectedAccelerometer<W> {
    SelectedAccelerometer::<W>::with_output(out)
}

/// Runs the fixed sequence init, configure, read_sample, diagnostic once on `accel`.
///
/// The first failing operation stops the sequence and its error is returned.
pub fn exercise(accel: &mut dyn Accelerometer, settings: Settings) -> ImuResult<AccelSample> {
    debug!("exercising the {} accelerometer", accel.name());
    accel.init()?;
    accel.configure(settings)?;
    let sample = accel.read_sample()?;
    accel.diagnostic();
    debug!("{} done, got {}", accel.name(), sample);
    Ok(sample)
}

/// Prints the header to `out` then exercises the selected backend on the same sink.
/// Hands the sink back with the sample.
#[cfg(any(bosch_backend, stm_backend))]
pub fn run_selected<W: Write>(mut out: W, settings: Settings) -> ImuResult<(AccelSample, W)> {
    write_line(&mut out, format_args!("{HEADER}"))?;
    let mut accel = selected_backend_with(out);
    let sample = exercise(&mut accel, settings)?;
    Ok((sample, accel.into_output()))
}
