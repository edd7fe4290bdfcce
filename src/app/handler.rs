use crate::core::decoder::decode_str;
use crate::core::engine::QrEngine;
use crate::core::Pipeline;
use crate::domain::model::HandlerResponse;
use crate::utils::error::{QrError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const MSG_INVALID_QUERY: &str = "Invalid query.";
pub const MSG_URL_TOO_LONG: &str = "URL is too long.";
pub const MSG_CREATED: &str = "Created a QR code.";

/// HTTP-triggered event. Only the query string is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiRequest {
    #[serde(rename = "queryStringParameters", default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl ApiRequest {
    pub fn with_query<K, V>(params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            query_string_parameters: Some(
                params
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn query(&self, key: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|q| q.get(key))
            .map(String::as_str)
    }
}

/// Decodes the base64 `url` parameter, generates the QR code and writes it.
///
/// A missing parameter or a URL too long for the fixed version yields a 400
/// response. Malformed base64 and I/O or image failures are returned as errors.
pub async fn handle_request<P: Pipeline>(
    request: &ApiRequest,
    engine: &QrEngine<P>,
) -> Result<HandlerResponse> {
    let Some(encoded) = request.query("url") else {
        tracing::warn!("Request has no url parameter");
        return HandlerResponse::with_message(400, MSG_INVALID_QUERY);
    };

    let url = decode_str(encoded)?;

    match engine.run(&url).await {
        Ok(_) => HandlerResponse::with_message(200, MSG_CREATED),
        Err(QrError::UrlTooLong { .. }) => {
            tracing::error!("No QR code image was created.");
            HandlerResponse::with_message(400, MSG_URL_TOO_LONG)
        }
        Err(e) => Err(e),
    }
}
