//! Channel wire protocol: one JSON request per line in, one JSON response
//! per line out.

use arkit_common::{RequestId, ShapeError};
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// One newline-delimited frame read from the host.
#[derive(Debug, PartialEq)]
pub enum Frame {
    /// Trimmed frame text. May be empty.
    Text(String),
    /// The frame's bytes are not UTF-8.
    NotUtf8(std::str::Utf8Error),
}

/// Read the next frame, or `None` at EOF.
///
/// Frames are split on raw bytes so a bad frame never ends the stream.
pub async fn read_frame<R>(reader: &mut R, buf: &mut Vec<u8>) -> std::io::Result<Option<Frame>>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    if reader.read_until(b'\n', buf).await? == 0 {
        return Ok(None);
    }
    Ok(Some(match std::str::from_utf8(buf) {
        Ok(text) => Frame::Text(text.trim().to_string()),
        Err(e) => Frame::NotUtf8(e),
    }))
}

/// A method call from the host.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub method: String,
    #[serde(default)]
    pub arguments: serde_json::Value,
}

impl ChannelRequest {
    /// The caller's id, or a fresh correlation id if none was sent.
    pub fn request_id(&self) -> RequestId {
        match &self.id {
            Some(id) => RequestId::from(id.as_str()),
            None => RequestId::new(),
        }
    }
}

/// Reply to one request. Serializes as `{"id", "ok"}` or `{"id", "error"}`.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelResponse {
    pub id: RequestId,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Ok(serde_json::Value),
    Error(ErrorBody),
}

impl ChannelResponse {
    pub fn ok(id: RequestId, value: serde_json::Value) -> Self {
        Self {
            id,
            outcome: Outcome::Ok(value),
        }
    }

    pub fn error(id: RequestId, error: ErrorBody) -> Self {
        Self {
            id,
            outcome: Outcome::Error(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, Outcome::Ok(_))
    }

    pub fn to_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(
                "{{\"id\":\"{}\",\"error\":{{\"code\":\"internal\",\"message\":\"failed to serialize response: {e}\"}}}}",
                self.id
            )
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new("malformed", message)
    }

    pub fn unknown_method(method: &str) -> Self {
        Self::new("unknown_method", format!("unknown method '{method}'"))
    }

    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::new("invalid_arguments", message)
    }
}

impl From<&ShapeError> for ErrorBody {
    fn from(e: &ShapeError) -> Self {
        Self::new(e.code(), e.to_string())
    }
}

impl From<ShapeError> for ErrorBody {
    fn from(e: ShapeError) -> Self {
        Self::from(&e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkit_common::ShapeKind;
    use serde_json::json;

    #[tokio::test]
    async fn frames_survive_invalid_utf8() {
        let mut input: &[u8] = b"{\"a\": 1}\r\n\xff\xfe\nlast";
        let mut buf = Vec::new();

        assert_eq!(
            read_frame(&mut input, &mut buf).await.unwrap(),
            Some(Frame::Text("{\"a\": 1}".into()))
        );
        assert!(matches!(
            read_frame(&mut input, &mut buf).await.unwrap(),
            Some(Frame::NotUtf8(_))
        ));
        assert_eq!(
            read_frame(&mut input, &mut buf).await.unwrap(),
            Some(Frame::Text("last".into()))
        );
        assert_eq!(read_frame(&mut input, &mut buf).await.unwrap(), None);
    }

    #[test]
    fn request_parses_all_fields() {
        let req = serde_json::from_str::<ChannelRequest>(
            r#"{"id": "r1", "method": "construct", "arguments": {"kind": "sphere", "radius": 1}}"#,
        )
        .unwrap();
        assert_eq!(req.id.as_deref(), Some("r1"));
        assert_eq!(req.method, "construct");
        assert_eq!(req.arguments["kind"], "sphere");
        assert_eq!(req.request_id().as_str(), "r1");
    }

    #[test]
    fn request_without_id_or_arguments() {
        let req = serde_json::from_str::<ChannelRequest>(r#"{"method": "kinds"}"#).unwrap();
        assert!(req.id.is_none());
        assert!(req.arguments.is_null());
        assert_eq!(req.request_id().as_str().len(), 8);
    }

    #[test]
    fn request_without_method_is_rejected() {
        assert!(serde_json::from_str::<ChannelRequest>(r#"{"id": "r1"}"#).is_err());
        assert!(serde_json::from_str::<ChannelRequest>("not json").is_err());
    }

    #[test]
    fn ok_response_shape() {
        let resp = ChannelResponse::ok(RequestId::from("a"), json!(["sphere"]));
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({"id": "a", "ok": ["sphere"]})
        );
        assert!(resp.is_ok());
    }

    #[test]
    fn error_response_shape() {
        let err = ShapeError::MissingParameter {
            kind: ShapeKind::Sphere,
            field: "radius",
        };
        let resp = ChannelResponse::error(RequestId::from("b"), ErrorBody::from(&err));
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "id": "b",
                "error": {
                    "code": "missing_parameter",
                    "message": "sphere: missing required parameter 'radius'"
                }
            })
        );
        assert!(!resp.is_ok());
    }

    #[test]
    fn response_line_is_single_line_json() {
        let resp = ChannelResponse::error(RequestId::from("c"), ErrorBody::malformed("bad\ninput"));
        let line = resp.to_line();
        assert!(!line.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["error"]["code"], "malformed");
    }
}
