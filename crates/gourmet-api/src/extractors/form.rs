//! Multipart form extractor
//!
//! Profiles and posts are submitted as `multipart/form-data` so that images and
//! 3D models travel with the text fields. `FormData` collects every part, and the
//! request DTOs are built from it with `TryFrom`.

use std::collections::HashMap;
use std::str::FromStr;

use axum::{
    async_trait,
    extract::{multipart::MultipartError, FromRequest, Multipart, Request},
    http::StatusCode,
};
use gourmet_core::Snowflake;
use gourmet_service::dto::{
    CreatePostRequest, CreateProfileRequest, UpdatePostRequest, UpdateProfileRequest, UploadedFile,
};
use validator::Validate;

use crate::response::ApiError;

/// Text fields and files of a multipart body
#[derive(Debug, Default)]
pub struct FormData {
    texts: HashMap<String, Vec<String>>,
    files: HashMap<String, UploadedFile>,
}

impl FormData {
    /// First value of a text field
    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts.get(name).and_then(|values| values.first()).map(String::as_str)
    }

    pub fn require_text(&self, name: &str) -> Result<String, ApiError> {
        self.text(name)
            .map(str::to_string)
            .ok_or_else(|| required(name))
    }

    /// Parse a text field, `None` when it was not sent
    pub fn parse<T: FromStr>(&self, name: &str) -> Result<Option<T>, ApiError> {
        self.text(name)
            .map(|raw| {
                raw.trim()
                    .parse()
                    .map_err(|_| ApiError::invalid_multipart(format!("{name}: A valid number is required.")))
            })
            .transpose()
    }

    pub fn require_parsed<T: FromStr>(&self, name: &str) -> Result<T, ApiError> {
        self.parse(name)?.ok_or_else(|| required(name))
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }

    pub fn require_file(&mut self, name: &str) -> Result<UploadedFile, ApiError> {
        self.take_file(name)
            .ok_or_else(|| ApiError::invalid_multipart(format!("{name}: No file was submitted.")))
    }

    /// Category ids, sent as repeated fields or comma-separated. `None` when absent.
    pub fn categories(&self) -> Result<Option<Vec<Snowflake>>, ApiError> {
        let Some(values) = self.texts.get("category") else {
            return Ok(None);
        };

        values
            .iter()
            .flat_map(|value| value.split(','))
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| {
                value.parse::<Snowflake>().map_err(|_| {
                    ApiError::invalid_multipart(format!(
                        "category: Incorrect type. Expected pk value, received {value}."
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    pub fn insert_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.texts.entry(name.into()).or_default().push(value.into());
    }

    pub fn insert_file(&mut self, name: impl Into<String>, file: UploadedFile) {
        self.files.insert(name.into(), file);
    }

    async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await.map_err(multipart_error)?;

                    // Browsers send an empty part for an untouched file input
                    if file_name.is_empty() && bytes.is_empty() {
                        continue;
                    }

                    form.insert_file(
                        name,
                        UploadedFile {
                            file_name,
                            content_type,
                            bytes: bytes.to_vec(),
                        },
                    );
                }
                None => {
                    let value = field.text().await.map_err(multipart_error)?;
                    form.insert_text(name, value);
                }
            }
        }

        Ok(form)
    }
}

fn required(name: &str) -> ApiError {
    ApiError::invalid_multipart(format!("{name}: This field is required."))
}

fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::invalid_multipart(err.body_text())
    }
}

#[async_trait]
impl<S> FromRequest<S> for FormData
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_multipart(e.body_text()))?;

        Self::read(multipart).await
    }
}

// ============================================================================
// Request DTOs from form data
// ============================================================================

impl TryFrom<FormData> for CreateProfileRequest {
    type Error = ApiError;

    fn try_from(mut form: FormData) -> Result<Self, Self::Error> {
        Ok(Self {
            nick_name: form.require_text("nickName")?,
            img: form.take_file("img"),
        })
    }
}

impl TryFrom<FormData> for UpdateProfileRequest {
    type Error = ApiError;

    fn try_from(mut form: FormData) -> Result<Self, Self::Error> {
        Ok(Self {
            nick_name: form.text("nickName").map(str::to_string),
            img: form.take_file("img"),
        })
    }
}

impl TryFrom<FormData> for CreatePostRequest {
    type Error = ApiError;

    fn try_from(mut form: FormData) -> Result<Self, Self::Error> {
        Ok(Self {
            restaurant_name: form.require_text("restaurant_name")?,
            location: form.require_text("location")?,
            menu_item: form.require_text("menu_item")?,
            price: form.require_parsed("price")?,
            score: form.require_parsed("score")?,
            review_text: form.require_text("review_text")?,
            category: form.categories()?.unwrap_or_default(),
            menu_item_photo: form.require_file("menu_item_photo")?,
            menu_item_model: form.require_file("menu_item_model")?,
        })
    }
}

impl TryFrom<FormData> for UpdatePostRequest {
    type Error = ApiError;

    fn try_from(mut form: FormData) -> Result<Self, Self::Error> {
        Ok(Self {
            restaurant_name: form.text("restaurant_name").map(str::to_string),
            location: form.text("location").map(str::to_string),
            menu_item: form.text("menu_item").map(str::to_string),
            price: form.parse("price")?,
            score: form.parse("score")?,
            review_text: form.text("review_text").map(str::to_string),
            category: form.categories()?,
            menu_item_photo: form.take_file("menu_item_photo"),
            menu_item_model: form.take_file("menu_item_model"),
        })
    }
}

/// Validated multipart extractor
///
/// Reads the form, converts it into `T` and runs the `validator` rules.
#[derive(Debug, Clone)]
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    S: Send + Sync,
    T: TryFrom<FormData, Error = ApiError> + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let form = FormData::from_request(req, state).await?;
        let value = T::try_from(form)?;
        value.validate()?;
        Ok(ValidatedForm(value))
    }
}
