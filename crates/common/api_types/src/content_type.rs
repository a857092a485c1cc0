use actix_web::http::header::{self, HeaderMap};

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const SSZ_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    Ssz,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => JSON_CONTENT_TYPE,
            ContentType::Ssz => SSZ_CONTENT_TYPE,
        }
    }
}

fn header_names_ssz(headers: &HeaderMap, name: header::HeaderName) -> bool {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains(SSZ_CONTENT_TYPE))
}

/// Request body format, from the `Content-Type` header. Anything that is not
/// explicitly SSZ is treated as JSON.
pub fn request_content_type(headers: &HeaderMap) -> ContentType {
    if header_names_ssz(headers, header::CONTENT_TYPE) {
        ContentType::Ssz
    } else {
        ContentType::Json
    }
}

/// Response format negotiation, from the `Accept` header.
pub fn ssz_requested(headers: &HeaderMap) -> bool {
    header_names_ssz(headers, header::ACCEPT)
}
