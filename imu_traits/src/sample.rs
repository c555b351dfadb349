use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uom::si::acceleration::standard_gravity;
use uom::si::f32::Acceleration;

/// Opaque configuration word handed to [`crate::Accelerometer::configure`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(pub i32);

impl From<i32> for Settings {
    fn from(value: i32) -> Self {
        Settings(value)
    }
}

impl From<Settings> for i32 {
    fn from(settings: Settings) -> Self {
        settings.0
    }
}

impl Display for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One raw reading on the 3 axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct AccelSample {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl AccelSample {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Scales the raw counts to an acceleration.
    /// A count of 32768 maps to the full scale of `range`.
    pub fn to_acceleration(&self, range: AccelRange) -> [Acceleration; 3] {
        let full_scale = range.full_scale_g();
        [self.x, self.y, self.z]
            .map(|raw| Acceleration::new::<standard_gravity>(raw as f32 / 32768.0 * full_scale))
    }
}

impl From<(i32, i32, i32)> for AccelSample {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self { x, y, z }
    }
}

impl From<AccelSample> for (i32, i32, i32) {
    fn from(sample: AccelSample) -> Self {
        (sample.x, sample.y, sample.z)
    }
}

impl Display for AccelSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X={}, Y={}, Z={}", self.x, self.y, self.z)
    }
}

/// Measurement range of the accelerometer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub enum AccelRange {
    G2,
    G4,
    G8,
    #[default]
    G16,
}

impl AccelRange {
    pub fn full_scale_g(&self) -> f32 {
        match self {
            AccelRange::G2 => 2.0,
            AccelRange::G4 => 4.0,
            AccelRange::G8 => 8.0,
            AccelRange::G16 => 16.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_display() {
        let sample = AccelSample::new(10, -20, 30);
        assert_eq!(sample.to_string(), "X=10, Y=-20, Z=30");
    }

    #[test]
    fn test_sample_tuple_conversions() {
        let sample: AccelSample = (100, 200, 300).into();
        assert_eq!(sample, AccelSample::new(100, 200, 300));
        let (x, y, z) = sample.into();
        assert_eq!((x, y, z), (100, 200, 300));
    }

    #[test]
    fn test_to_acceleration_full_scale() {
        let sample = AccelSample::new(32768, -16384, 0);
        let [x, y, z] = sample.to_acceleration(AccelRange::G16);
        assert!((x.get::<standard_gravity>() - 16.0).abs() < 1e-4);
        assert!((y.get::<standard_gravity>() + 8.0).abs() < 1e-4);
        assert_eq!(z.get::<standard_gravity>(), 0.0);
    }

    #[test]
    fn test_to_acceleration_depends_on_range() {
        let sample = AccelSample::new(16384, 16384, 16384);
        let [narrow, _, _] = sample.to_acceleration(AccelRange::G2);
        let [wide, _, _] = sample.to_acceleration(AccelRange::G8);
        assert!((narrow.get::<standard_gravity>() - 1.0).abs() < 1e-4);
        assert!((wide.get::<standard_gravity>() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_bincode_round_trip() {
        let cfg = bincode::config::standard();

        let sample = AccelSample::new(10, -20, 30);
        let encoded = bincode::encode_to_vec(sample, cfg).unwrap();
        let (decoded, used) = bincode::decode_from_slice::<AccelSample, _>(&encoded, cfg).unwrap();
        assert_eq!(used, encoded.len());
        assert_eq!(decoded, sample);

        let encoded = bincode::encode_to_vec(Settings(-42), cfg).unwrap();
        let (decoded, _) = bincode::decode_from_slice::<Settings, _>(&encoded, cfg).unwrap();
        assert_eq!(decoded, Settings(-42));

        let encoded = bincode::encode_to_vec(AccelRange::G4, cfg).unwrap();
        let (decoded, _) = bincode::decode_from_slice::<AccelRange, _>(&encoded, cfg).unwrap();
        assert_eq!(decoded, AccelRange::G4);
    }

    #[test]
    fn test_settings_from_ron() {
        let settings: Settings = ron::from_str("42").unwrap();
        assert_eq!(settings, Settings(42));
        assert_eq!(i32::from(settings), 42);
        assert_eq!(settings.to_string(), "42");
    }
}
