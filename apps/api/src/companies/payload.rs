//! Company update bodies, accepted as JSON or `multipart/form-data`.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};
use bytes::Bytes;
use serde::Deserialize;
use url::Url;

use crate::errors::AppError;
use crate::extract::{nullable, optional_text, required_text, AppJson};
use crate::store::CompanyChanges;

const NAME_MAX: usize = 200;
const VIDEO_URL_MAX: usize = 200;

/// An uploaded logo or banner file.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Raw, unvalidated company fields as submitted.
#[derive(Debug, Default, Deserialize)]
pub struct CompanyPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub secondary_color: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub culture_video_url: Option<Option<String>>,
    #[serde(skip)]
    pub logo: Option<Upload>,
    #[serde(skip)]
    pub banner: Option<Upload>,
}

/// A validated company change set plus any files to store.
#[derive(Debug, Default)]
pub struct CompanyUpdate {
    pub changes: CompanyChanges,
    pub logo: Option<Upload>,
    pub banner: Option<Upload>,
}

impl CompanyUpdate {
    pub fn has_uploads(&self) -> bool {
        self.logo.is_some() || self.banner.is_some()
    }
}

#[async_trait]
impl<S> FromRequest<S> for CompanyPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, AppError> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            read_multipart(multipart).await
        } else {
            let AppJson(payload) = AppJson::<CompanyPayload>::from_request(req, state).await?;
            Ok(payload)
        }
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<CompanyPayload, AppError> {
    let mut payload = CompanyPayload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "logo" | "banner" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(e.body_text()))?;

                // Browsers send an empty part when no file was picked
                if filename.is_empty() && data.is_empty() {
                    continue;
                }

                let upload = Some(Upload {
                    filename,
                    content_type,
                    data,
                });
                if name == "logo" {
                    payload.logo = upload;
                } else {
                    payload.banner = upload;
                }
            }
            "name" | "primary_color" | "secondary_color" | "culture_video_url" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(e.body_text()))?;
                match name.as_str() {
                    "name" => payload.name = Some(text),
                    "primary_color" => payload.primary_color = Some(text),
                    "secondary_color" => payload.secondary_color = Some(text),
                    _ => payload.culture_video_url = Some(Some(text)),
                }
            }
            _ => {}
        }
    }

    Ok(payload)
}

impl CompanyPayload {
    pub fn validate(self) -> Result<CompanyUpdate, AppError> {
        let name = self
            .name
            .as_deref()
            .map(|n| required_text(n, "name", NAME_MAX))
            .transpose()?;
        let primary_color = self
            .primary_color
            .as_deref()
            .map(|c| hex_color(c, "primary_color"))
            .transpose()?;
        let secondary_color = self
            .secondary_color
            .as_deref()
            .map(|c| hex_color(c, "secondary_color"))
            .transpose()?;

        let culture_video_url =
            optional_text(self.culture_video_url, "culture_video_url", VIDEO_URL_MAX)?;
        if let Some(Some(link)) = &culture_video_url {
            video_url(link)?;
        }

        for (field, upload) in [("logo", &self.logo), ("banner", &self.banner)] {
            if let Some(upload) = upload {
                if !upload.content_type.starts_with("image/") {
                    return Err(AppError::validation(format!("{field} must be an image")));
                }
            }
        }

        Ok(CompanyUpdate {
            changes: CompanyChanges {
                name,
                primary_color,
                secondary_color,
                culture_video_url,
                logo_key: None,
                banner_key: None,
            },
            logo: self.logo,
            banner: self.banner,
        })
    }
}

/// `#RRGGBB`, returned trimmed.
fn hex_color(value: &str, field: &str) -> Result<String, AppError> {
    let value = value.trim();
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(AppError::validation(format!(
            "{field} must be a hex color like #1A2B3C"
        )));
    }
    Ok(value.to_string())
}

fn video_url(value: &str) -> Result<(), AppError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(AppError::validation(
            "culture_video_url must be an http(s) URL",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> CompanyPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_validate_trims_and_keeps_colors() {
        let update = payload(r##"{"name": " Acme ", "primary_color": "#1a2B3c"}"##)
            .validate()
            .unwrap();
        assert_eq!(update.changes.name.as_deref(), Some("Acme"));
        assert_eq!(update.changes.primary_color.as_deref(), Some("#1a2B3c"));
        assert_eq!(update.changes.secondary_color, None);
        assert!(!update.has_uploads());
    }

    #[test]
    fn test_bad_colors_rejected() {
        for color in ["red", "#12345", "#1234567", "123456#", "#GGGGGG"] {
            let body = format!(r#"{{"secondary_color": "{color}"}}"#);
            assert!(payload(&body).validate().is_err(), "{color}");
        }
    }

    #[test]
    fn test_video_url_rules() {
        assert!(payload(r#"{"culture_video_url": "ftp://x.test/a"}"#)
            .validate()
            .is_err());
        assert!(payload(r#"{"culture_video_url": "not a url"}"#)
            .validate()
            .is_err());

        let cleared = payload(r#"{"culture_video_url": "  "}"#).validate().unwrap();
        assert_eq!(cleared.changes.culture_video_url, Some(None));

        let nulled = payload(r#"{"culture_video_url": null}"#).validate().unwrap();
        assert_eq!(nulled.changes.culture_video_url, Some(None));

        let set = payload(r#"{"culture_video_url": "https://youtu.be/x"}"#)
            .validate()
            .unwrap();
        assert_eq!(
            set.changes.culture_video_url,
            Some(Some("https://youtu.be/x".to_string()))
        );
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(payload(r#"{"name": "   "}"#).validate().is_err());
    }

    #[test]
    fn test_non_image_upload_rejected() {
        let mut body = payload("{}");
        body.logo = Some(Upload {
            filename: "notes.txt".to_string(),
            content_type: "text/plain".to_string(),
            data: Bytes::from_static(b"hello"),
        });
        assert!(body.validate().is_err());
    }
}
