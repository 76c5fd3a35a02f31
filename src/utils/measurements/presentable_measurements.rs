//! Resting place for [PresentableMeasurement]

use std::fmt::Display;
use once_cell::sync::Lazy;

/// := (threshold, scale, unit, format)
type AutoScaleEntry = (f64, f64, &'static str, &'static str);

/// Holds and present custom unit measurements with auto-scaling
pub struct PresentableMeasurement {
    pub(crate) value: f64,
    /// := (threshold, scale, unit, format)
    auto_scale: &'static [AutoScaleEntry],
}
impl Display for PresentableMeasurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // tables end with a 0.0 threshold, so only negative values -- or NaN -- fall through
        let Some(&(_threshold, scale, unit, format)) = self.auto_scale.iter()
            .find(|&&(threshold, ..)| self.value >= threshold)
        else {
            return write!(f, "{}", self.value)
        };
        let scaled = self.value / scale;
        match format {
            ":.0"  => write!(f, "{scaled:.0}{unit}"),
            ":.2"  => write!(f, "{scaled:.2}{unit}"),
            ":.3"  => write!(f, "{scaled:.3}{unit}"),
            ":.3e" => write!(f, "{scaled:.3e}{unit}"),
            _      => Err(std::fmt::Error),
        }
    }
}

/// Builds a [PresentableMeasurement] able to display & auto-scale
/// quantities representing "a duration, in nanoseconds".
pub fn nanoseconds_measurement(value_ns: f64) -> PresentableMeasurement {
    static AUTO_SCALE_DATA: Lazy<Vec<AutoScaleEntry>> = Lazy::new(|| {
        [
            (1e9, "s",  ":.3"),
            (1e6, "ms", ":.3"),
            (1e3, "µs", ":.2"),
            (0.0, "ns", ":.0"),
        ]
        .into_iter()
        .map(|(threshold, suffix, format)| (
            threshold,
            if threshold != 0.0 { threshold } else { 1.0 },
            suffix,
            format
        ))
        .collect()
    });

    PresentableMeasurement {
        value: value_ns,
        auto_scale: AUTO_SCALE_DATA.as_slice(),
    }
}

/// Builds a [PresentableMeasurement] able to display & auto-scale
/// quantities representing "a rate of operations per second".
pub fn operations_per_second_measurement(value: f64) -> PresentableMeasurement {
    static AUTO_SCALE_DATA: Lazy<Vec<AutoScaleEntry>> = Lazy::new(|| {
        [
            (1e9,  "Gops/s", ":.2"),
            (1e6,  "Mops/s", ":.2"),
            (1e3,  "Kops/s", ":.2"),
            (1.0,  "ops/s",  ":.2"),
            (0.0,  "ops/s",  ":.3e"),
        ]
        .into_iter()
        .map(|(threshold, suffix, format)| (
            threshold,
            if threshold > 1.0 { threshold } else { 1.0 },
            suffix,
            format
        ))
        .collect()
    });

    PresentableMeasurement {
        value,
        auto_scale: AUTO_SCALE_DATA.as_slice(),
    }
}
