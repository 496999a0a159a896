//! Compass heading telemetry.
//!
//! Raw sensor samples come in through [`HeadingStream::on_sample`] and leave
//! as [`HeadingEvent`]s on a single-subscriber channel. The sensor itself is
//! behind the [`HeadingSource`] trait so hosts can plug in their platform
//! compass.

pub mod event;
pub mod source;
pub mod stream;

pub use event::{HeadingEvent, HeadingSample, HEADING_CHANNEL, HEADING_NOT_AVAILABLE};
pub use source::{HeadingSource, ReplaySource};
pub use stream::{angular_distance, HeadingReceiver, HeadingStream};
