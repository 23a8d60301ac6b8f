use std::future::Future;

use crate::scoring::ScoreResult;

/// A label photo as uploaded by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelImage {
    bytes: Vec<u8>,
    content_type: mime::Mime,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("label photo is empty")]
    Empty,
    #[error("label photo is {size} bytes; the limit is {limit}")]
    TooLarge { size: usize, limit: usize },
    #[error("`{0}` is not an image content type")]
    NotAnImage(String),
}

impl LabelImage {
    pub fn new(bytes: Vec<u8>, content_type: &str, max_bytes: usize) -> Result<Self, ImageError> {
        let content_type: mime::Mime = content_type
            .parse()
            .map_err(|_| ImageError::NotAnImage(content_type.to_string()))?;
        if content_type.type_() != mime::IMAGE {
            return Err(ImageError::NotAnImage(content_type.to_string()));
        }
        if bytes.is_empty() {
            return Err(ImageError::Empty);
        }
        if bytes.len() > max_bytes {
            return Err(ImageError::TooLarge {
                size: bytes.len(),
                limit: max_bytes,
            });
        }

        Ok(Self {
            bytes,
            content_type,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn content_type(&self) -> &mime::Mime {
        &self.content_type
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
    #[error("request to {service} failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{service} returned {status}: {body}")]
    Upstream {
        service: &'static str,
        status: u16,
        body: String,
    },
    #[error("{0} returned an empty response")]
    EmptyResponse(&'static str),
    #[error("could not decode the {service} response: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// Extracts the ingredient text printed on a label photo.
pub trait LabelReader: Send + Sync {
    fn read_label(
        &self,
        image: &LabelImage,
    ) -> impl Future<Output = Result<String, GatewayError>> + Send;
}

/// Summarizes a score in one friendly sentence.
pub trait Narrator: Send + Sync {
    fn narrate(
        &self,
        result: &ScoreResult,
    ) -> impl Future<Output = Result<String, GatewayError>> + Send;
}

/// Turns narration into audio bytes.
pub trait SpeechSynthesizer: Send + Sync {
    fn synthesize(&self, text: &str)
        -> impl Future<Output = Result<Vec<u8>, GatewayError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_images_within_the_limit() {
        let image = LabelImage::new(vec![0xff, 0xd8], "image/jpeg", 16).expect("valid image");

        assert_eq!(image.content_type().subtype(), mime::JPEG);
        assert_eq!(image.bytes().len(), 2);
    }

    #[test]
    fn rejects_non_images_empty_and_oversized_uploads() {
        assert_eq!(
            LabelImage::new(vec![1], "text/plain", 16),
            Err(ImageError::NotAnImage("text/plain".to_string()))
        );
        assert_eq!(LabelImage::new(Vec::new(), "image/png", 16), Err(ImageError::Empty));
        assert_eq!(
            LabelImage::new(vec![0; 17], "image/png", 16),
            Err(ImageError::TooLarge { size: 17, limit: 16 })
        );
    }
}
