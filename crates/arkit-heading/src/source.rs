//! Heading sensor abstraction.

/// A device compass the stream can switch on and off.
///
/// Implementations push their samples into [`HeadingStream::on_sample`]
/// themselves; the stream only controls whether updates are running.
///
/// [`HeadingStream::on_sample`]: crate::HeadingStream::on_sample
pub trait HeadingSource: Send {
    /// Whether the device can report a heading at all.
    fn heading_available(&self) -> bool;

    /// Begin heading updates, coalesced by the sensor to changes of at
    /// least `filter_degrees`.
    fn start(&mut self, filter_degrees: f64);

    /// Stop heading updates. Stopping an idle source is a no-op.
    fn stop(&mut self);
}

/// Source for recorded samples fed in by the host, e.g. from a file or stdin.
///
/// It never produces samples on its own; it only tracks the on/off state the
/// stream asks for.
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    available: bool,
    active: bool,
    filter_degrees: Option<f64>,
}

impl ReplaySource {
    pub fn new() -> Self {
        Self {
            available: true,
            ..Self::default()
        }
    }

    /// A source on a device without a compass.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Filter passed to the most recent `start`.
    pub fn filter_degrees(&self) -> Option<f64> {
        self.filter_degrees
    }
}

impl HeadingSource for ReplaySource {
    fn heading_available(&self) -> bool {
        self.available
    }

    fn start(&mut self, filter_degrees: f64) {
        self.active = true;
        self.filter_degrees = Some(filter_degrees);
    }

    fn stop(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_source_tracks_state() {
        let mut source = ReplaySource::new();
        assert!(source.heading_available());
        assert!(!source.is_active());

        source.start(2.5);
        assert!(source.is_active());
        assert_eq!(source.filter_degrees(), Some(2.5));

        source.stop();
        source.stop();
        assert!(!source.is_active());
    }

    #[test]
    fn unavailable_source() {
        assert!(!ReplaySource::unavailable().heading_available());
    }
}
