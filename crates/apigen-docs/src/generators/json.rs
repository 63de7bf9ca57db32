use serde::Serialize;

use crate::{
    error::{DocsError, Result},
    model::MethodDoc,
};

/// Pretty-printed JSON representation of the documentation models.
pub fn render_json(methods: &[MethodDoc]) -> Result<String> {
    let payload = JsonPayload {
        version: env!("CARGO_PKG_VERSION"),
        methods,
    };

    serde_json::to_string_pretty(&payload).map_err(|error| DocsError::Other {
        message: error.to_string(),
    })
}

#[derive(Serialize)]
struct JsonPayload<'a> {
    version: &'static str,
    methods: &'a [MethodDoc],
}
