use serde::Deserialize;

/// Query parameters of the produce-block endpoint. The hex fields stay raw
/// strings here; the handler decodes them so malformed input maps to the
/// endpoint's own error messages rather than a generic extractor failure.
#[derive(Debug, Default, Deserialize)]
pub struct ProduceBlockQuery {
    pub randao_reveal: Option<String>,
    pub graffiti: Option<String>,
    pub skip_randao_verification: Option<bool>,
}
