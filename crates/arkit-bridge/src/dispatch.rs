//! Channel request validation and dispatch to the shape factory.

use arkit_common::{RequestId, ShapeKind};
use arkit_geometry::{schema_for, ParameterSet, ShapeFactory};
use serde_json::{json, Value};

use crate::protocol::{ChannelRequest, ChannelResponse, ErrorBody};

// =============================================================================
// METHOD ALLOWLIST
// =============================================================================

/// Methods the channel accepts. Anything else is rejected and logged.
const ALLOWED_METHODS: &[&str] = &["construct", "describe", "kinds"];

pub fn is_method_allowed(method: &str) -> bool {
    ALLOWED_METHODS.contains(&method)
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Turns raw request lines into responses. Holds no per-request state.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    factory: ShapeFactory,
}

impl Dispatcher {
    pub fn new(factory: ShapeFactory) -> Self {
        Self { factory }
    }

    /// Handle one framed message and produce exactly one response.
    pub fn handle_line(&self, line: &str) -> ChannelResponse {
        let raw: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(body_len = line.len(), error = %e, "request rejected: invalid JSON");
                return ChannelResponse::error(RequestId::new(), ErrorBody::malformed(e.to_string()));
            }
        };

        let fallback_id = raw
            .get("id")
            .and_then(Value::as_str)
            .map(RequestId::from)
            .unwrap_or_default();

        match serde_json::from_value::<ChannelRequest>(raw) {
            Ok(req) => self.handle(req),
            Err(e) => {
                tracing::warn!(id = %fallback_id, error = %e, "request rejected: bad envelope");
                ChannelResponse::error(fallback_id, ErrorBody::malformed(e.to_string()))
            }
        }
    }

    pub fn handle(&self, req: ChannelRequest) -> ChannelResponse {
        let id = req.request_id();

        if !is_method_allowed(&req.method) {
            tracing::warn!(id = %id, method = %req.method, "request rejected: unknown method");
            return ChannelResponse::error(id, ErrorBody::unknown_method(&req.method));
        }

        tracing::debug!(id = %id, method = %req.method, "request dispatched");

        let result = match req.method.as_str() {
            "construct" => self.construct(&req.arguments),
            "describe" => describe(&req.arguments),
            "kinds" => Ok(kinds()),
            // Allowlist checked above
            other => Err(ErrorBody::unknown_method(other)),
        };

        match result {
            Ok(value) => ChannelResponse::ok(id, value),
            Err(error) => {
                tracing::debug!(id = %id, code = %error.code, "request failed: {}", error.message);
                ChannelResponse::error(id, error)
            }
        }
    }

    fn construct(&self, arguments: &Value) -> Result<Value, ErrorBody> {
        let map = arguments
            .as_object()
            .ok_or_else(|| ErrorBody::invalid_arguments("construct arguments must be an object"))?;
        let kind = kind_argument(arguments)?;

        let mut params = ParameterSet::from_json_map(map);
        params.remove("kind");

        let descriptor = self.factory.construct_named(kind, &params)?;
        serde_json::to_value(&descriptor)
            .map_err(|e| ErrorBody::new("internal", format!("failed to encode geometry: {e}")))
    }
}

fn kind_argument(arguments: &Value) -> Result<&str, ErrorBody> {
    arguments
        .get("kind")
        .and_then(Value::as_str)
        .ok_or_else(|| ErrorBody::invalid_arguments("'kind' must be a shape name string"))
}

fn describe(arguments: &Value) -> Result<Value, ErrorBody> {
    let kind: ShapeKind = kind_argument(arguments)?.parse()?;
    Ok(json!({
        "kind": kind,
        "required": schema_for(kind).required,
        "optional": schema_for(kind).optional,
        "capabilityGated": kind.is_capability_gated(),
    }))
}

fn kinds() -> Value {
    ShapeKind::ALL
        .iter()
        .map(|k| Value::from(k.channel_name()))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
