//! Small helpers every Bilo service exposes through `/shared-utils-demo`.

use serde_json::{json, Value};

pub fn hello_from_shared_utils(service: &str) -> String {
    format!("Hello from shared utils, {service}!")
}

/// Wrap a payload in the standard success envelope.
pub fn success_response(data: Value) -> Value {
    json!({ "success": true, "data": data })
}
