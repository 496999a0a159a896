//! Request/response loop over line-delimited JSON.

use arkit_common::RequestId;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

use crate::dispatch::Dispatcher;
use crate::protocol::{read_frame, ChannelResponse, ErrorBody, Frame};

/// Counters for one serve session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ServeStats {
    pub handled: usize,
    pub failed: usize,
}

/// Answer every request line from `reader` on `writer` until EOF.
///
/// Blank lines are skipped. A frame that is not UTF-8 gets a `malformed`
/// response like any other unparseable request. Each response is flushed
/// as soon as it is written so the host sees it without waiting for the
/// next request.
pub async fn serve<R, W>(
    dispatcher: &Dispatcher,
    mut reader: R,
    mut writer: W,
) -> arkit_common::Result<ServeStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut stats = ServeStats::default();

    while let Some(frame) = read_frame(&mut reader, &mut buf).await? {
        let response = match frame {
            Frame::Text(line) if line.is_empty() => continue,
            Frame::Text(line) => dispatcher.handle_line(&line),
            Frame::NotUtf8(e) => {
                tracing::warn!(body_len = buf.len(), error = %e, "request rejected: not UTF-8");
                ChannelResponse::error(RequestId::new(), ErrorBody::malformed(e.to_string()))
            }
        };
        stats.handled += 1;
        if !response.is_ok() {
            stats.failed += 1;
        }

        writer.write_all(response.to_line().as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    tracing::info!(
        handled = stats.handled,
        failed = stats.failed,
        "channel closed"
    );
    Ok(stats)
}
