//! Bosch accelerometer backend.
//!
//! This backend does not talk to a device yet: every read returns the same fixed sample.
//! The human readable trace of each operation goes to the output sink given at construction
//! (stdout by default).
use imu_traits::{write_line, AccelSample, Accelerometer, ImuResult, Settings};
use log::{debug, warn};
use std::io::{stdout, Stdout, Write};

/// What a read returns on this backend.
pub const BOSCH_FIXED_SAMPLE: AccelSample = AccelSample::new(10, 20, 30);

pub struct BoschAccelerometer<W: Write = Stdout> {
    out: W,
}

impl BoschAccelerometer<Stdout> {
    pub fn new() -> Self {
        Self::with_output(stdout())
    }
}

impl Default for BoschAccelerometer<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> BoschAccelerometer<W> {
    /// Builds the backend writing its trace to `out`.
    pub fn with_output(out: W) -> Self {
        Self { out }
    }

    /// Gives the output sink back, useful to inspect what was written.
    pub fn into_output(self) -> W {
        self.out
    }
}

impl<W: Write> Accelerometer for BoschAccelerometer<W> {
    fn name(&self) -> &'static str {
        "bosch"
    }

    fn init(&mut self) -> ImuResult<()> {
        debug!("bosch: init");
        write_line(&mut self.out, format_args!("Bosch accelerometer initialized."))
    }

    fn configure(&mut self, settings: Settings) -> ImuResult<()> {
        debug!("bosch: configure with {}", settings);
        write_line(
            &mut self.out,
            format_args!("Bosch accelerometer configured with settings: {settings}"),
        )
    }

    fn read_sample(&mut self) -> ImuResult<AccelSample> {
        let sample = BOSCH_FIXED_SAMPLE;
        write_line(
            &mut self.out,
            format_args!("Bosch accelerometer data: {sample}"),
        )?;
        Ok(sample)
    }

    fn diagnostic(&mut self) {
        if let Err(e) = write_line(&mut self.out, format_args!("Hello World")) {
            warn!("bosch: diagnostic lost: {}", e);
        }
    }
}
