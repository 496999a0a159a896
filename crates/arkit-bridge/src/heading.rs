//! Heading replay: recorded sensor samples in, heading events out.

use arkit_config::schema::HeadingConfig;
use arkit_heading::{HeadingReceiver, HeadingSample, HeadingStream, ReplaySource, HEADING_CHANNEL};
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

use crate::protocol::{read_frame, Frame};

/// Feed every sample line from `reader` through a [`HeadingStream`] and write
/// the delivered events to `writer`, one JSON object per line.
///
/// Lines that are not valid samples, including lines that are not UTF-8,
/// are logged and skipped. Returns the
/// number of events written.
pub async fn replay<R, W>(
    config: &HeadingConfig,
    compass_available: bool,
    mut reader: R,
    mut writer: W,
) -> arkit_common::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let source = if compass_available {
        ReplaySource::new()
    } else {
        ReplaySource::unavailable()
    };
    let mut stream = HeadingStream::new(source, config);
    let mut events = stream.listen();

    tracing::info!(
        channel = HEADING_CHANNEL,
        filter_degrees = stream.filter_degrees(),
        display_calibration = stream.should_display_calibration(),
        "heading stream listening"
    );

    let mut written = drain(&mut events, &mut writer).await?;

    let mut buf = Vec::new();
    while let Some(frame) = read_frame(&mut reader, &mut buf).await? {
        let line = match frame {
            Frame::Text(line) if line.is_empty() => continue,
            Frame::Text(line) => line,
            Frame::NotUtf8(e) => {
                tracing::warn!(error = %e, "skipping heading sample that is not UTF-8");
                continue;
            }
        };
        match serde_json::from_str::<HeadingSample>(&line) {
            Ok(sample) => {
                stream.on_sample(sample);
            }
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed heading sample");
                continue;
            }
        }
        written += drain(&mut events, &mut writer).await?;
    }

    stream.cancel();
    tracing::info!(events = written, "heading stream cancelled");
    Ok(written)
}

async fn drain<W>(events: &mut HeadingReceiver, writer: &mut W) -> arkit_common::Result<usize>
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0;
    while let Ok(event) = events.try_recv() {
        let line = event.to_json().to_string();
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        written += 1;
    }
    if written > 0 {
        writer.flush().await?;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    async fn run(config: &HeadingConfig, compass: bool, input: impl AsRef<[u8]>) -> Vec<Value> {
        let mut output = Vec::new();
        let written = replay(config, compass, input.as_ref(), &mut output)
            .await
            .unwrap();
        let events: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(events.len(), written);
        events
    }

    #[tokio::test]
    async fn replays_samples_through_the_filter() {
        let input = concat!(
            r#"{"trueHeading": 10.0, "magneticHeading": 8.0, "accuracy": 5.0}"#,
            "\n",
            r#"{"trueHeading": 10.4, "magneticHeading": 8.4, "accuracy": 5.0}"#,
            "\n",
            "not a sample\n",
            r#"{"trueHeading": -1.0, "magneticHeading": 20.0, "accuracy": -1.0}"#,
            "\n",
        );
        let events = run(&HeadingConfig::default(), true, input).await;
        assert_eq!(
            events,
            vec![
                json!({"heading": 10.0, "isTrue": true, "accuracy": 5.0}),
                json!({"heading": 20.0, "isTrue": false, "accuracy": -1.0}),
            ]
        );
    }

    #[tokio::test]
    async fn invalid_utf8_sample_is_skipped() {
        let mut input = b"\xff\xfe\n".to_vec();
        input.extend_from_slice(br#"{"trueHeading": 30.0, "magneticHeading": 28.0, "accuracy": 5.0}"#);
        input.push(b'\n');

        let events = run(&HeadingConfig::default(), true, input).await;
        assert_eq!(
            events,
            vec![json!({"heading": 30.0, "isTrue": true, "accuracy": 5.0})]
        );
    }

    #[tokio::test]
    async fn no_compass_reports_unavailable() {
        let input = r#"{"trueHeading": 10.0, "magneticHeading": 8.0, "accuracy": 5.0}"#;
        let events = run(&HeadingConfig::default(), false, input).await;
        assert_eq!(events, vec![json!({"error": "heading_not_available"})]);
    }
}
