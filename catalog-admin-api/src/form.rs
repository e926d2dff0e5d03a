//! Multipart form collection.
//!
//! Text parts become `(name, value)` pairs in arrival order, ready for
//! [`catalog_admin::schema::coerce_form`]. File parts are accepted only under
//! the names a route declares, each with a maximum count.

use axum::extract::Multipart;
use catalog_admin::media::ImageUpload;

use crate::error::AppError;

/// A file field a route accepts, with the most files it may carry.
#[derive(Debug, Clone, Copy)]
pub struct FileField {
    pub name: &'static str,
    pub max_count: usize,
}

impl FileField {
    pub const fn single(name: &'static str) -> Self {
        Self { name, max_count: 1 }
    }

    pub const fn many(name: &'static str, max_count: usize) -> Self {
        Self { name, max_count }
    }
}

#[derive(Debug, Default)]
pub struct FormData {
    pub fields: Vec<(String, String)>,
    files: Vec<(String, ImageUpload)>,
}

impl FormData {
    /// Drain a multipart body.
    ///
    /// A file part under an undeclared name, or more files than a field
    /// allows, is a 400. Empty file parts (a form's untouched file input) are
    /// skipped.
    pub async fn read(mut multipart: Multipart, accepted: &[FileField]) -> Result<Self, AppError> {
        let mut form = FormData::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            if field.file_name().is_none() {
                let value = field.text().await?;
                form.fields.push((name, value));
                continue;
            }

            let spec = accepted
                .iter()
                .find(|f| f.name == name)
                .ok_or_else(|| AppError::bad_request(format!("Unexpected file field: {}", name)))?;

            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field.bytes().await?;
            if bytes.is_empty() {
                continue;
            }

            if form.files(&name).count() >= spec.max_count {
                return Err(AppError::bad_request(format!(
                    "Too many files for {} (max {})",
                    name, spec.max_count
                )));
            }

            form.files
                .push((name, ImageUpload::new(content_type, bytes.to_vec())));
        }

        Ok(form)
    }

    pub fn files<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ImageUpload> + 'a {
        self.files
            .iter()
            .filter(move |(n, _)| n == name)
            .map(|(_, upload)| upload)
    }

    /// Take every file uploaded under `name`, in arrival order.
    pub fn take_files(&mut self, name: &str) -> Vec<ImageUpload> {
        let (taken, kept) = std::mem::take(&mut self.files)
            .into_iter()
            .partition::<Vec<_>, _>(|(n, _)| n == name);
        self.files = kept;
        taken.into_iter().map(|(_, upload)| upload).collect()
    }

    pub fn take_file(&mut self, name: &str) -> Option<ImageUpload> {
        self.take_files(name).into_iter().next()
    }
}
