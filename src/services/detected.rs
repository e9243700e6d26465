//! Listing of detection snapshots stored under the web root.

use crate::domain::types::PublicId;
use crate::dto::detected::DetectedFolderDto;
use crate::images::ImageStore;
use crate::services::{ServiceError, ServiceResult};

pub const NO_DETECTED_FOLDER: &str = "No detected images folder found.";
pub const NO_DETECTED_DATA: &str = "No detected data for the provided GUID.";

/// Lists detected folders. `base_url` is the absolute URL of
/// `images/detected`, e.g. `http://host/images/detected`.
pub fn list_detected(
    images: &ImageStore,
    guid: Option<&str>,
    base_url: &str,
) -> ServiceResult<Vec<DetectedFolderDto>> {
    if !images.detected_dir().is_dir() {
        return Err(ServiceError::NotFound(NO_DETECTED_FOLDER.to_string()));
    }

    // Folders are named by the canonical lower-case guid.
    let guid = guid
        .map(|raw| raw.parse::<PublicId>())
        .transpose()
        .map_err(|_| ServiceError::NotFound(NO_DETECTED_DATA.to_string()))?;

    let folders = images
        .list_detected(guid)
        .map_err(|e| ServiceError::Internal(e.to_string()))?
        .ok_or_else(|| ServiceError::NotFound(NO_DETECTED_DATA.to_string()))?;

    Ok(folders
        .into_iter()
        .map(|folder| DetectedFolderDto::new(folder, base_url))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn missing_root_and_missing_guid_are_distinguished() {
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::new(dir.path());

        match list_detected(&images, None, "http://h/images/detected") {
            Err(ServiceError::NotFound(message)) => assert_eq!(message, NO_DETECTED_FOLDER),
            other => panic!("unexpected result: {other:?}"),
        }

        fs::create_dir_all(images.detected_dir()).unwrap();
        let guid = PublicId::new().to_string();
        match list_detected(&images, Some(&guid), "http://h/images/detected") {
            Err(ServiceError::NotFound(message)) => assert_eq!(message, NO_DETECTED_DATA),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(list_detected(&images, None, "http://h/images/detected")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn path_like_guids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::new(dir.path());
        fs::create_dir_all(images.detected_dir()).unwrap();

        assert!(matches!(
            list_detected(&images, Some(".."), "http://h/images/detected"),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn guid_casing_and_braces_resolve_to_the_same_folder() {
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::new(dir.path());
        let guid = PublicId::new().to_string();
        fs::create_dir_all(images.detected_dir().join(&guid).join("s1")).unwrap();

        for requested in [guid.to_uppercase(), format!("{{{guid}}}")] {
            let folders =
                list_detected(&images, Some(&requested), "http://h/images/detected").unwrap();
            assert_eq!(folders.len(), 1);
            assert_eq!(folders[0].guid, guid);
        }
    }

    #[test]
    fn builds_absolute_urls() {
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::new(dir.path());
        let guid = PublicId::new().to_string();
        let session = images.detected_dir().join(&guid).join("2024-05-01 10");
        fs::create_dir_all(&session).unwrap();
        fs::write(session.join("1.jpg"), b"x").unwrap();

        let folders = list_detected(&images, Some(&guid), "http://h/images/detected").unwrap();
        assert_eq!(folders.len(), 1);
        assert_eq!(
            folders[0].sessions[0].files[0].url,
            format!("http://h/images/detected/{guid}/2024-05-01%2010/1.jpg")
        );
    }
}
