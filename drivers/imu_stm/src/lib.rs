//! STMicroelectronics accelerometer backend. Reads return a fixed sample, traces go to the
//! output sink given at construction.
use imu_traits::{write_line, AccelSample, Accelerometer, ImuResult, Settings};
use log::{debug, warn};
use std::io::{stdout, Stdout, Write};

pub const STM_FIXED_SAMPLE: AccelSample = AccelSample::new(100, 200, 300);

/// Placeholder readings only, no device access.
pub struct StmAccelerometer<W: Write = Stdout> {
    out: W,
}

impl StmAccelerometer<Stdout> {
    pub fn new() -> Self {
        Self::with_output(stdout())
    }
}

impl Default for StmAccelerometer<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StmAccelerometer<W> {
    pub fn with_output(out: W) -> Self {
        Self { out }
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<W: Write> Accelerometer for StmAccelerometer<W> {
    fn name(&self) -> &'static str {
        "stm"
    }

    fn init(&mut self) -> ImuResult<()> {
        debug!("stm: init");
        write_line(&mut self.out, format_args!("STM accelerometer initialized."))
    }

    fn configure(&mut self, settings: Settings) -> ImuResult<()> {
        debug!("stm: configure with {}", settings);
        write_line(
            &mut self.out,
            format_args!("STM accelerometer configured with settings: {settings}"),
        )
    }

    fn read_sample(&mut self) -> ImuResult<AccelSample> {
        let sample = STM_FIXED_SAMPLE;
        write_line(&mut self.out, format_args!("STM accelerometer data: {sample}"))?;
        Ok(sample)
    }

    fn diagnostic(&mut self) {
        if let Err(e) = write_line(&mut self.out, format_args!("Hello Worlds")) {
            warn!("stm: diagnostic lost: {}", e);
        }
    }
}
