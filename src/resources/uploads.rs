// ABOUTME: Upload facade: send activity files as multipart forms and poll their status
// ABOUTME: The file format is inferred from the file name when not given explicitly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use strava_core::models::{NewUpload, Upload, UploadDataType};
use tokio::fs;
use tracing::{debug, warn};

use crate::client::Strava;
use crate::errors::ApiError;

/// Upload endpoints
#[derive(Debug, Clone, Copy)]
pub struct UploadsApi<'a> {
    client: &'a Strava,
}

impl Strava {
    /// Upload endpoints
    #[must_use]
    pub const fn uploads(&self) -> UploadsApi<'_> {
        UploadsApi { client: self }
    }
}

impl UploadsApi<'_> {
    /// Get the processing status of an upload (`GET /uploads/{id}`)
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn get(&self, id: u64) -> Result<Upload, ApiError> {
        let request = self.client.get(&format!("/uploads/{id}"));
        self.client.send_json(request).await
    }

    /// Upload an activity file (`POST /uploads`)
    ///
    /// The file is sent as the `file` part of a multipart form together with
    /// the metadata in `upload`. `trainer` and `commute` travel as `"1"`/`"0"`
    /// and are omitted when unset. When `upload.data_type` is `None` it is
    /// inferred from `file_name`.
    ///
    /// Not yet verified against the live API. Requires the `activity:write` scope.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`ApiError`] unchanged
    pub async fn create(
        &self,
        file_name: &str,
        file: impl Into<Bytes>,
        upload: &NewUpload,
    ) -> Result<Upload, ApiError> {
        warn!(file_name, "activity upload is unverified against the live API");

        let mut metadata = upload.clone();
        if metadata.data_type.is_none() {
            metadata.data_type = UploadDataType::from_file_name(file_name);
            debug!(file_name, data_type = ?metadata.data_type, "Inferred upload data type");
        }

        let file: Bytes = file.into();
        let length = file.len() as u64;
        let part = Part::stream_with_length(file, length).file_name(file_name.to_owned());
        let form = metadata
            .form_fields()
            .into_iter()
            .fold(Form::new().part("file", part), |form, (key, value)| {
                form.text(key, value)
            });

        let request = self.client.post("/uploads").multipart(form);
        self.client.send_json(request).await
    }

    /// Read an activity file from disk and upload it
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::File`] when the file cannot be read, otherwise the
    /// pipeline's [`ApiError`] unchanged
    pub async fn create_from_path(
        &self,
        path: impl AsRef<Path>,
        upload: &NewUpload,
    ) -> Result<Upload, ApiError> {
        let path = path.as_ref();
        let contents = fs::read(path).await.map_err(|source| ApiError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.create(&file_name, contents, upload).await
    }
}
