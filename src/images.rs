//! Filesystem storage for uploaded criminal photos and the detected-image
//! folders written by the camera client.
//!
//! Everything lives below the configured web root:
//!
//! * `images/criminals/<guid>.<ext>` holds uploaded photos;
//! * `images/detected/<guid>/<session>/<file>` holds detection snapshots.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::types::PublicId;

/// URL prefix under which the web root `images` directory is served.
pub const IMAGES_URL_PREFIX: &str = "/images";
const CRIMINALS_DIR: &str = "criminals";
const DETECTED_DIR: &str = "detected";
const DEFAULT_EXTENSION: &str = "jpg";

#[derive(Debug, Error)]
pub enum ImageStoreError {
    #[error("malformed data uri")]
    MalformedDataUri,

    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("image url outside of the image store: {0}")]
    ForeignUrl(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A decoded image payload with the file extension it should be stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub bytes: Vec<u8>,
    pub extension: String,
}

/// Maps a MIME subtype onto a file extension.
fn extension_for(subtype: &str) -> String {
    match subtype {
        "jpeg" | "jpg" => "jpg".to_string(),
        "png" => "png".to_string(),
        "gif" => "gif".to_string(),
        other if !other.is_empty() && other.chars().all(|c| c.is_ascii_alphanumeric()) => {
            other.to_ascii_lowercase()
        }
        _ => DEFAULT_EXTENSION.to_string(),
    }
}

/// Decodes either a bare base64 string or a `data:[<mime>][;base64],<data>` URI.
pub fn decode_image(payload: &str) -> Result<DecodedImage, ImageStoreError> {
    let payload = payload.trim();
    let mut extension = DEFAULT_EXTENSION.to_string();
    let mut data = payload;

    let is_data_uri = payload
        .get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"));

    if is_data_uri {
        let (meta, rest) = payload[5..]
            .split_once(',')
            .ok_or(ImageStoreError::MalformedDataUri)?;
        let mime = meta.split(';').next().unwrap_or_default();
        if let Some((_, subtype)) = mime.split_once('/') {
            extension = extension_for(subtype);
        }
        data = rest;
    }

    let bytes = STANDARD.decode(data.trim())?;
    Ok(DecodedImage { bytes, extension })
}

/// Percent-encodes a single URL path segment (RFC 3986 unreserved set kept).
pub fn encode_path_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

/// One file inside a detected-images folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedFile {
    pub file_name: String,
    /// Path segments below `images/detected`, file name included.
    pub segments: Vec<String>,
    pub size: u64,
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedSession {
    pub session: String,
    pub files: Vec<DetectedFile>,
}

/// Everything captured for one criminal guid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedFolder {
    pub guid: String,
    pub sessions: Vec<DetectedSession>,
    pub files: Vec<DetectedFile>,
}

/// Image storage rooted at the web root directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    web_root: PathBuf,
}

impl ImageStore {
    pub fn new(web_root: impl Into<PathBuf>) -> Self {
        Self {
            web_root: web_root.into(),
        }
    }

    /// Directory served at [`IMAGES_URL_PREFIX`].
    pub fn images_dir(&self) -> PathBuf {
        self.web_root.join("images")
    }

    pub fn detected_dir(&self) -> PathBuf {
        self.images_dir().join(DETECTED_DIR)
    }

    /// Decodes and writes the photo of `guid`, returning its public URL.
    pub fn save_criminal_image(
        &self,
        guid: PublicId,
        payload: &str,
    ) -> Result<String, ImageStoreError> {
        let image = decode_image(payload)?;

        let dir = self.images_dir().join(CRIMINALS_DIR);
        fs::create_dir_all(&dir)?;

        let file_name = format!("{guid}.{}", image.extension);
        fs::write(dir.join(&file_name), &image.bytes)?;

        Ok(format!("{IMAGES_URL_PREFIX}/{CRIMINALS_DIR}/{file_name}"))
    }

    /// Deletes the file behind a public image URL. Missing files are not an error.
    pub fn remove_image(&self, url: &str) -> Result<(), ImageStoreError> {
        let path = self.resolve_url(url)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Maps `/images/...` onto the filesystem, refusing anything that could
    /// escape the images directory.
    fn resolve_url(&self, url: &str) -> Result<PathBuf, ImageStoreError> {
        let relative = url
            .strip_prefix(IMAGES_URL_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or_else(|| ImageStoreError::ForeignUrl(url.to_string()))?;

        let relative = Path::new(relative);
        let is_plain = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if !is_plain || relative.as_os_str().is_empty() {
            return Err(ImageStoreError::ForeignUrl(url.to_string()));
        }

        Ok(self.images_dir().join(relative))
    }

    /// Lists detected folders, optionally restricted to one guid.
    ///
    /// Returns `Ok(None)` when the requested directory does not exist.
    pub fn list_detected(
        &self,
        guid: Option<PublicId>,
    ) -> Result<Option<Vec<DetectedFolder>>, ImageStoreError> {
        let root = self.detected_dir();
        if !root.is_dir() {
            return Ok(None);
        }

        let folders = match guid {
            Some(guid) => {
                let dir = root.join(guid.to_string());
                if !dir.is_dir() {
                    return Ok(None);
                }
                vec![dir]
            }
            None => sorted_entries(&root, EntryKind::Dir)?,
        };

        folders
            .iter()
            .map(|dir| read_folder(dir))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
}

fn sorted_entries(dir: &Path, kind: EntryKind) -> io::Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = match kind {
            EntryKind::Dir => path.is_dir(),
            EntryKind::File => path.is_file(),
        };
        if matches {
            entries.push(path);
        }
    }
    entries.sort();
    Ok(entries)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn read_files(dir: &Path, prefix: &[String]) -> io::Result<Vec<DetectedFile>> {
    sorted_entries(dir, EntryKind::File)?
        .into_iter()
        .map(|path| {
            let metadata = fs::metadata(&path)?;
            let name = file_name(&path);
            let mut segments = prefix.to_vec();
            segments.push(name.clone());
            Ok(DetectedFile {
                file_name: name,
                segments,
                size: metadata.len(),
                last_modified: metadata.modified().ok().map(DateTime::<Utc>::from),
            })
        })
        .collect()
}

fn read_folder(dir: &Path) -> Result<DetectedFolder, ImageStoreError> {
    let guid = file_name(dir);

    let sessions = sorted_entries(dir, EntryKind::Dir)?
        .into_iter()
        .map(|session_dir| {
            let session = file_name(&session_dir);
            let files = read_files(&session_dir, &[guid.clone(), session.clone()])?;
            Ok(DetectedSession { session, files })
        })
        .collect::<io::Result<Vec<_>>>()?;

    let files = read_files(dir, std::slice::from_ref(&guid))?;

    Ok(DetectedFolder {
        guid,
        sessions,
        files,
    })
}
