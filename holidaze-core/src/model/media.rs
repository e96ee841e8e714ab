use serde::{Deserialize, Serialize};

/// An image reference. The API sends `{url, alt}` objects, older records
/// hold plain URL strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MediaRepr")]
pub struct Media {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MediaRepr {
    Url(String),
    Object {
        url: String,
        #[serde(default)]
        alt: Option<String>,
    },
}

impl From<MediaRepr> for Media {
    fn from(repr: MediaRepr) -> Self {
        match repr {
            MediaRepr::Url(url) => Media { url, alt: None },
            MediaRepr::Object { url, alt } => Media { url, alt },
        }
    }
}

impl Media {
    pub fn new(url: impl Into<String>, alt: Option<String>) -> Self {
        Media {
            url: url.into(),
            alt,
        }
    }
}
