//! Decoded image payloads handed over by the loading collaborator.

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;

/// An image delivered as a data URI (`data:image/<subtype>[;params],<data>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    media_type: String,
    data_uri: String,
}

impl ImagePayload {
    /// Accept a data URI whose media type is `image/*`.
    pub fn from_data_uri(data_uri: impl Into<String>) -> Result<Self, PayloadError> {
        let data_uri = data_uri.into();
        let rest = data_uri.strip_prefix("data:").ok_or(PayloadError::NotDataUri)?;
        let (header, _data) = rest.split_once(',').ok_or(PayloadError::NotDataUri)?;
        let media_type = header.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();

        if !media_type.starts_with("image/") {
            return Err(PayloadError::UnsupportedMediaType { media_type });
        }

        Ok(Self { media_type, data_uri })
    }

    /// The declared media type, e.g. `image/png`.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }
}
