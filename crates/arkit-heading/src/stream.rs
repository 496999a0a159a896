//! Single-subscriber heading stream.

use arkit_config::schema::HeadingConfig;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::event::{HeadingEvent, HeadingSample};
use crate::source::HeadingSource;

/// Receiving end handed to the subscriber. Closed when the subscription is
/// cancelled or replaced.
pub type HeadingReceiver = mpsc::UnboundedReceiver<HeadingEvent>;

/// Shortest distance between two compass headings, in degrees (0-180).
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Push-stream handler in front of a [`HeadingSource`].
///
/// At most one subscriber is active. A new [`listen`](Self::listen) closes the
/// previous receiver before installing its own.
pub struct HeadingStream<S: HeadingSource> {
    source: S,
    sink: Option<mpsc::UnboundedSender<HeadingEvent>>,
    filter_degrees: f64,
    display_calibration: bool,
    updating: bool,
    last_heading: Option<f64>,
}

impl<S: HeadingSource> HeadingStream<S> {
    pub fn new(source: S, config: &HeadingConfig) -> Self {
        Self {
            source,
            sink: None,
            filter_degrees: config.filter_degrees.max(0.0),
            display_calibration: config.display_calibration,
            updating: false,
            last_heading: None,
        }
    }

    /// Subscribe, replacing any current subscriber.
    ///
    /// If the device has no heading sensor the receiver gets a single
    /// `heading_not_available` error and the source is left off.
    pub fn listen(&mut self) -> HeadingReceiver {
        if self.sink.take().is_some() {
            debug!("replacing heading subscriber");
            self.source.stop();
            self.updating = false;
        }
        self.last_heading = None;

        let (tx, rx) = mpsc::unbounded_channel();
        if self.source.heading_available() {
            self.source.start(self.filter_degrees);
            self.updating = true;
            debug!(filter_degrees = self.filter_degrees, "heading updates started");
        } else {
            warn!("heading not available on this device");
            // The receiver is still held by the caller, so this cannot fail.
            let _ = tx.send(HeadingEvent::not_available());
        }
        self.sink = Some(tx);
        rx
    }

    /// Stop updates and drop the subscriber.
    pub fn cancel(&mut self) {
        self.source.stop();
        self.updating = false;
        if self.sink.take().is_some() {
            debug!("heading subscriber cancelled");
        }
        self.last_heading = None;
    }

    /// Forward one sensor sample. Returns whether an event was delivered.
    ///
    /// Samples are dropped when nobody is listening, when updates were never
    /// started, or when the heading moved less than the filter since the last
    /// delivered reading.
    pub fn on_sample(&mut self, sample: HeadingSample) -> bool {
        let Some(sink) = self.sink.as_ref().filter(|_| self.updating) else {
            return false;
        };

        let event = HeadingEvent::from_sample(&sample);
        let heading = event.heading();

        if let (Some(last), Some(current)) = (self.last_heading, heading) {
            if self.filter_degrees > 0.0 && angular_distance(last, current) < self.filter_degrees {
                return false;
            }
        }

        if sink.send(event).is_err() {
            debug!("heading subscriber went away, stopping updates");
            self.cancel();
            return false;
        }
        self.last_heading = heading;
        true
    }

    /// Whether the platform may show its compass calibration prompt.
    pub fn should_display_calibration(&self) -> bool {
        self.display_calibration
    }

    pub fn is_listening(&self) -> bool {
        self.sink.is_some()
    }

    pub fn filter_degrees(&self) -> f64 {
        self.filter_degrees
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
