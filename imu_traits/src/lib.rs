//! Shared contract for the accelerometer backends.
//!
//! A backend is any type implementing [`Accelerometer`]. The concrete backend used by an
//! application is chosen once, at build time, and handed to the code that drives it.
mod sample;

pub use sample::{AccelRange, AccelSample, Settings};

use std::error::Error;
use std::fmt::{Arguments, Display, Formatter};
use std::io::Write;

/// Common IMU Error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImuError {
    message: String,
    cause: Option<String>,
}

impl Display for ImuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let cause_str = match &self.cause {
            Some(c) => c.as_str(),
            None => "None",
        };
        write!(f, "{}\n   cause: {}", self.message, cause_str)?;
        Ok(())
    }
}

impl Error for ImuError {}

impl From<&str> for ImuError {
    fn from(s: &str) -> ImuError {
        ImuError {
            message: s.to_string(),
            cause: None,
        }
    }
}

impl From<String> for ImuError {
    fn from(s: String) -> ImuError {
        ImuError {
            message: s,
            cause: None,
        }
    }
}

impl ImuError {
    pub fn new_with_cause(message: &str, cause: impl Error) -> ImuError {
        ImuError {
            message: message.to_string(),
            cause: Some(cause.to_string()),
        }
    }

    pub fn add_cause(mut self, cause: &str) -> ImuError {
        self.cause = Some(cause.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }
}

// Generic Result type for the IMU crates.
pub type ImuResult<T> = Result<T, ImuError>;

/// The capability set every accelerometer backend provides.
///
/// The trait is object safe so a driver can take a `&mut dyn Accelerometer` and stay
/// independent of the backend that was compiled in.
pub trait Accelerometer {
    /// Short identifier of the backend, used in logs.
    fn name(&self) -> &'static str;

    /// Backend specific setup.
    fn init(&mut self) -> ImuResult<()>;

    /// Applies an opaque settings value. Its meaning is up to the backend.
    fn configure(&mut self, settings: Settings) -> ImuResult<()>;

    /// Reads one 3 axis sample.
    fn read_sample(&mut self) -> ImuResult<AccelSample>;

    /// Emits the backend greeting. Nothing is reported back to the caller.
    fn diagnostic(&mut self);
}

/// Writes one diagnostic line to a backend output sink.
pub fn write_line<W: Write + ?Sized>(out: &mut W, args: Arguments<'_>) -> ImuResult<()> {
    writeln!(out, "{args}")
        .and_then(|_| out.flush())
        .map_err(|e| ImuError::new_with_cause("Could not write the diagnostic line", e))
}
