//! Heading samples and the events delivered to subscribers.

use serde::{Deserialize, Serialize};

/// Event channel the heading stream is published on.
pub const HEADING_CHANNEL: &str = "with_light_star/true_heading";

/// Error sent when the device has no heading sensor.
pub const HEADING_NOT_AVAILABLE: &str = "heading_not_available";

/// One raw update from the heading sensor.
///
/// A negative `true_heading` means true north is not (yet) known. A negative
/// `accuracy` means the reading is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingSample {
    #[serde(default = "true_north_unknown")]
    pub true_heading: f64,
    pub magnetic_heading: f64,
    pub accuracy: f64,
}

fn true_north_unknown() -> f64 {
    -1.0
}

impl HeadingSample {
    pub fn new(true_heading: f64, magnetic_heading: f64, accuracy: f64) -> Self {
        Self {
            true_heading,
            magnetic_heading,
            accuracy,
        }
    }
}

/// Message pushed to the subscriber.
///
/// Serializes to `{"heading", "isTrue", "accuracy"}` or `{"error"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeadingEvent {
    Reading {
        heading: f64,
        #[serde(rename = "isTrue")]
        is_true: bool,
        accuracy: f64,
    },
    Error {
        error: String,
    },
}

impl HeadingEvent {
    /// Prefer true north; fall back to magnetic north when it is unknown.
    pub fn from_sample(sample: &HeadingSample) -> Self {
        let is_true = sample.true_heading >= 0.0;
        HeadingEvent::Reading {
            heading: if is_true {
                sample.true_heading
            } else {
                sample.magnetic_heading
            },
            is_true,
            accuracy: sample.accuracy,
        }
    }

    pub fn not_available() -> Self {
        HeadingEvent::Error {
            error: HEADING_NOT_AVAILABLE.to_string(),
        }
    }

    /// The delivered heading, if this is a reading.
    pub fn heading(&self) -> Option<f64> {
        match self {
            HeadingEvent::Reading { heading, .. } => Some(*heading),
            HeadingEvent::Error { .. } => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn true_heading_is_preferred() {
        let event = HeadingEvent::from_sample(&HeadingSample::new(90.0, 87.5, 5.0));
        assert_eq!(
            event,
            HeadingEvent::Reading {
                heading: 90.0,
                is_true: true,
                accuracy: 5.0,
            }
        );
    }

    #[test]
    fn zero_true_heading_counts_as_true() {
        let event = HeadingEvent::from_sample(&HeadingSample::new(0.0, 359.0, 5.0));
        assert_eq!(event.heading(), Some(0.0));
        assert!(matches!(event, HeadingEvent::Reading { is_true: true, .. }));
    }

    #[test]
    fn negative_true_heading_falls_back_to_magnetic() {
        let event = HeadingEvent::from_sample(&HeadingSample::new(-1.0, 87.5, 10.0));
        assert_eq!(
            event,
            HeadingEvent::Reading {
                heading: 87.5,
                is_true: false,
                accuracy: 10.0,
            }
        );
    }

    #[test]
    fn invalid_accuracy_passes_through() {
        let event = HeadingEvent::from_sample(&HeadingSample::new(12.0, 10.0, -1.0));
        assert!(matches!(event, HeadingEvent::Reading { accuracy, .. } if accuracy == -1.0));
    }

    #[test]
    fn reading_wire_shape() {
        let event = HeadingEvent::from_sample(&HeadingSample::new(-1.0, 45.0, 3.0));
        assert_eq!(
            event.to_json(),
            json!({"heading": 45.0, "isTrue": false, "accuracy": 3.0})
        );
    }

    #[test]
    fn error_wire_shape() {
        assert_eq!(
            HeadingEvent::not_available().to_json(),
            json!({"error": "heading_not_available"})
        );
        assert_eq!(HeadingEvent::not_available().heading(), None);
    }

    #[test]
    fn sample_parses_camel_case() {
        let sample: HeadingSample = serde_json::from_str(
            r#"{"trueHeading": 120.0, "magneticHeading": 118.0, "accuracy": 4.0}"#,
        )
        .unwrap();
        assert_eq!(sample, HeadingSample::new(120.0, 118.0, 4.0));
    }

    #[test]
    fn sample_without_true_heading_is_magnetic_only() {
        let sample: HeadingSample =
            serde_json::from_str(r#"{"magneticHeading": 200.0, "accuracy": 4.0}"#).unwrap();
        assert!(sample.true_heading < 0.0);
        assert!(matches!(
            HeadingEvent::from_sample(&sample),
            HeadingEvent::Reading { is_true: false, heading, .. } if heading == 200.0
        ));
    }

    #[test]
    fn events_parse_back() {
        let reading: HeadingEvent =
            serde_json::from_value(json!({"heading": 1.0, "isTrue": true, "accuracy": 2.0}))
                .unwrap();
        assert_eq!(reading.heading(), Some(1.0));

        let error: HeadingEvent =
            serde_json::from_value(json!({"error": "heading_not_available"})).unwrap();
        assert_eq!(error, HeadingEvent::not_available());
    }
}
