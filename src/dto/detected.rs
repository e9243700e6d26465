//! Read shapes for the detected-images listing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::images::{DetectedFile, DetectedFolder, DetectedSession, encode_path_segment};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetectedFileDto {
    pub file_name: String,
    pub url: String,
    pub size: u64,
    pub last_modified: Option<DateTime<Utc>>,
}

impl DetectedFileDto {
    /// `base_url` is the absolute URL of the `images/detected` directory.
    pub fn new(file: DetectedFile, base_url: &str) -> Self {
        let path = file
            .segments
            .iter()
            .map(|segment| encode_path_segment(segment))
            .collect::<Vec<_>>()
            .join("/");
        Self {
            file_name: file.file_name,
            url: format!("{base_url}/{path}"),
            size: file.size,
            last_modified: file.last_modified,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetectedSessionDto {
    pub session: String,
    pub files: Vec<DetectedFileDto>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetectedFolderDto {
    pub guid: String,
    pub sessions: Vec<DetectedSessionDto>,
    pub files: Vec<DetectedFileDto>,
}

impl DetectedFolderDto {
    pub fn new(folder: DetectedFolder, base_url: &str) -> Self {
        let to_files = |files: Vec<DetectedFile>| {
            files
                .into_iter()
                .map(|file| DetectedFileDto::new(file, base_url))
                .collect::<Vec<_>>()
        };

        Self {
            guid: folder.guid,
            sessions: folder
                .sessions
                .into_iter()
                .map(|DetectedSession { session, files }| DetectedSessionDto {
                    session,
                    files: to_files(files),
                })
                .collect(),
            files: to_files(folder.files),
        }
    }
}
