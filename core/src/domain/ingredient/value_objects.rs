use base64::{Engine as _, engine::general_purpose};

use crate::domain::common::entities::app_errors::CoreError;

/// Largest decoded photo accepted for recognition.
pub const MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024; // 10MB

const DATA_URI_PREFIX: &str = "data:";
const IMAGE_MIME_PREFIX: &str = "image/";
const BASE64_MARKER: &str = ";base64,";

#[derive(Debug, Clone)]
pub struct RecognizeIngredientsInput {
    pub photo_data_uri: String,
}

/// A validated `data:image/<type>;base64,<payload>` photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoDataUri {
    mime_type: String,
    data: String,
}

impl PhotoDataUri {
    /// Parses and validates a data URI.
    ///
    /// The MIME type must start with `image/`, the payload must be base64 and
    /// decode to between 1 byte and [`MAX_PHOTO_BYTES`].
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        let rest = value
            .strip_prefix(DATA_URI_PREFIX)
            .ok_or(CoreError::InvalidPhoto)?;

        if !rest.starts_with(IMAGE_MIME_PREFIX) {
            return Err(CoreError::InvalidPhoto);
        }

        let (media_type, data) = rest
            .split_once(BASE64_MARKER)
            .ok_or(CoreError::InvalidPhoto)?;

        // Drop media type parameters such as `;name=fridge.png`.
        let mime_type = media_type.split(';').next().unwrap_or_default().trim();
        Self::validate_mime_type(mime_type)?;

        let data = data.trim();
        let decoded = general_purpose::STANDARD
            .decode(data)
            .map_err(|_| CoreError::InvalidPhoto)?;
        Self::validate_size(decoded.len())?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }

    /// Builds a data URI from raw uploaded bytes.
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Result<Self, CoreError> {
        let mime_type = mime_type.trim();
        if !mime_type.starts_with(IMAGE_MIME_PREFIX) {
            return Err(CoreError::InvalidPhoto);
        }
        Self::validate_mime_type(mime_type)?;
        Self::validate_size(bytes.len())?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: general_purpose::STANDARD.encode(bytes),
        })
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The base64 payload without the `data:` header.
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn to_uri(&self) -> String {
        format!(
            "{DATA_URI_PREFIX}{}{BASE64_MARKER}{}",
            self.mime_type, self.data
        )
    }

    fn validate_mime_type(mime_type: &str) -> Result<(), CoreError> {
        let subtype = mime_type
            .strip_prefix(IMAGE_MIME_PREFIX)
            .ok_or(CoreError::InvalidPhoto)?;

        if subtype.is_empty() || subtype.contains(char::is_whitespace) {
            return Err(CoreError::InvalidPhoto);
        }
        Ok(())
    }

    fn validate_size(len: usize) -> Result<(), CoreError> {
        if len == 0 || len > MAX_PHOTO_BYTES {
            return Err(CoreError::InvalidPhoto);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIXEL: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    #[test]
    fn parse_accepts_base64_image_uri() {
        let uri = format!("data:image/png;base64,{PIXEL}");
        let photo = PhotoDataUri::parse(&uri).unwrap();

        assert_eq!(photo.mime_type(), "image/png");
        assert_eq!(photo.data(), PIXEL);
        assert_eq!(photo.to_uri(), uri);
    }

    #[test]
    fn parse_ignores_media_type_parameters() {
        let uri = format!("data:image/jpeg;name=fridge.jpg;base64,{PIXEL}");
        let photo = PhotoDataUri::parse(&uri).unwrap();

        assert_eq!(photo.mime_type(), "image/jpeg");
    }

    #[test]
    fn parse_rejects_malformed_uris() {
        let cases = [
            String::new(),
            "not a data uri".to_string(),
            format!("data:text/plain;base64,{PIXEL}"),
            format!("DATA:image/png;base64,{PIXEL}"),
            format!("data:image/;base64,{PIXEL}"),
            format!("data:image/png,{PIXEL}"),
            "data:image/png;base64,".to_string(),
            "data:image/png;base64,@@not-base64@@".to_string(),
            format!("https://example.com/{PIXEL}.png"),
        ];

        for case in cases {
            assert_eq!(
                PhotoDataUri::parse(&case),
                Err(CoreError::InvalidPhoto),
                "accepted {case:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_oversized_payload() {
        let payload = general_purpose::STANDARD.encode(vec![0u8; MAX_PHOTO_BYTES + 1]);
        let uri = format!("data:image/png;base64,{payload}");

        assert_eq!(PhotoDataUri::parse(&uri), Err(CoreError::InvalidPhoto));
    }

    #[test]
    fn from_bytes_encodes_payload() {
        let photo = PhotoDataUri::from_bytes("image/webp", b"fake image").unwrap();

        assert_eq!(photo.mime_type(), "image/webp");
        assert_eq!(
            general_purpose::STANDARD.decode(photo.data()).unwrap(),
            b"fake image"
        );
        assert!(PhotoDataUri::parse(&photo.to_uri()).is_ok());
    }

    #[test]
    fn from_bytes_rejects_non_images_and_empty_uploads() {
        assert_eq!(
            PhotoDataUri::from_bytes("application/pdf", b"%PDF"),
            Err(CoreError::InvalidPhoto)
        );
        assert_eq!(
            PhotoDataUri::from_bytes("image/png", b""),
            Err(CoreError::InvalidPhoto)
        );
    }
}
