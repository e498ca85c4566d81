// ABOUTME: File upload metadata and upload status payloads
// ABOUTME: Upload form fields encode trainer/commute as "1"/"0" strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseVocabularyError;
use crate::vocabulary::wire_enum;

wire_enum! {
    /// Format of an uploaded activity file
    pub enum UploadDataType("upload data type") {
        /// Garmin FIT
        Fit => "fit",
        /// Gzipped FIT
        FitGz => "fit.gz",
        /// Training Center XML
        Tcx => "tcx",
        /// Gzipped TCX
        TcxGz => "tcx.gz",
        /// GPS Exchange Format
        Gpx => "gpx",
        /// Gzipped GPX
        GpxGz => "gpx.gz",
    }
}

impl UploadDataType {
    /// Infer the data type from a file name such as `morning.fit.gz`
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let lower = file_name.to_ascii_lowercase();
        // Longest suffixes first so `.fit.gz` is not taken for `.gz`
        [
            Self::FitGz,
            Self::TcxGz,
            Self::GpxGz,
            Self::Fit,
            Self::Tcx,
            Self::Gpx,
        ]
        .into_iter()
        .find(|data_type| {
            lower
                .strip_suffix(data_type.as_str())
                .is_some_and(|stem| stem.ends_with('.'))
        })
    }
}

/// Metadata sent alongside an uploaded file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUpload {
    /// The desired name of the resulting activity
    pub name: Option<String>,
    /// The desired description of the resulting activity
    pub description: Option<String>,
    /// Whether the resulting activity should be marked as having been performed on a trainer
    pub trainer: Option<bool>,
    /// Whether the resulting activity should be tagged as a commute
    pub commute: Option<bool>,
    /// The format of the uploaded file
    pub data_type: Option<UploadDataType>,
    /// The desired external identifier of the resulting activity
    pub external_id: Option<String>,
}

impl NewUpload {
    /// Text fields of the multipart form, in a stable order; absent values are omitted
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::with_capacity(6);
        if let Some(name) = &self.name {
            fields.push(("name", name.clone()));
        }
        if let Some(description) = &self.description {
            fields.push(("description", description.clone()));
        }
        if let Some(trainer) = self.trainer {
            fields.push(("trainer", flag_as_text(trainer)));
        }
        if let Some(commute) = self.commute {
            fields.push(("commute", flag_as_text(commute)));
        }
        if let Some(data_type) = self.data_type {
            fields.push(("data_type", data_type.as_str().to_owned()));
        }
        if let Some(external_id) = &self.external_id {
            fields.push(("external_id", external_id.clone()));
        }
        fields
    }
}

fn flag_as_text(flag: bool) -> String {
    if flag { "1" } else { "0" }.to_owned()
}

/// Processing status of an upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upload {
    /// The unique identifier of the upload
    pub id: u64,
    /// The unique identifier of the upload in string format
    pub id_str: Option<String>,
    /// The external identifier of the upload
    pub external_id: Option<String>,
    /// The error associated with this upload
    pub error: Option<String>,
    /// The status of this upload
    pub status: Option<String>,
    /// The identifier of the activity this upload resulted into
    pub activity_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_encode_flags_as_strings() {
        let upload = NewUpload {
            name: Some("Commute home".to_owned()),
            trainer: Some(false),
            commute: Some(true),
            data_type: Some(UploadDataType::GpxGz),
            ..NewUpload::default()
        };

        assert_eq!(
            upload.form_fields(),
            vec![
                ("name", "Commute home".to_owned()),
                ("trainer", "0".to_owned()),
                ("commute", "1".to_owned()),
                ("data_type", "gpx.gz".to_owned()),
            ]
        );
    }

    #[test]
    fn test_form_fields_omit_absent_flags() {
        let fields = NewUpload::default().form_fields();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_data_type_from_file_name() {
        assert_eq!(UploadDataType::from_file_name("ride.FIT"), Some(UploadDataType::Fit));
        assert_eq!(UploadDataType::from_file_name("ride.fit.gz"), Some(UploadDataType::FitGz));
        assert_eq!(UploadDataType::from_file_name("run.tcx"), Some(UploadDataType::Tcx));
        assert_eq!(UploadDataType::from_file_name("notes.txt"), None);
        assert_eq!(UploadDataType::from_file_name("gpx"), None);
    }

    #[test]
    fn test_upload_status_parses() {
        let upload: Upload = serde_json::from_str(
            r#"{"id": 2, "id_str": "2", "status": "Your activity is still being processed.", "activity_id": null, "error": null}"#,
        )
        .unwrap();
        assert_eq!(upload.id, 2);
        assert!(upload.activity_id.is_none());
    }
}
