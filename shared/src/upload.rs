use serde::{Deserialize, Serialize};

/// Extensions the upload control accepts.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "bmp"];

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Upload rules the backend is running with, served at `/api/config`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UploadSettings {
    pub max_upload_bytes: usize,
    pub accepted_extensions: Vec<String>,
}

impl UploadSettings {
    pub fn with_limit(max_upload_bytes: usize) -> Self {
        Self {
            max_upload_bytes,
            accepted_extensions: ACCEPTED_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self::with_limit(DEFAULT_MAX_UPLOAD_BYTES)
    }
}

pub fn extension_of(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

pub fn is_accepted_file_name(file_name: &str) -> bool {
    extension_of(file_name)
        .map(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Human readable size limit, in whole MiB when it divides evenly.
pub fn format_limit(bytes: usize) -> String {
    const MIB: usize = 1024 * 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{} MiB", bytes / MIB)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Value for the `accept` attribute of a file input.
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_extensions_case_insensitively() {
        assert!(is_accepted_file_name("board.jpg"));
        assert!(is_accepted_file_name("board.JPEG"));
        assert!(is_accepted_file_name("scan.v2.Png"));
        assert!(is_accepted_file_name("a.bmp"));
    }

    #[test]
    fn rejects_other_names() {
        assert!(!is_accepted_file_name("board.gif"));
        assert!(!is_accepted_file_name("board"));
        assert!(!is_accepted_file_name(".png"));
        assert!(!is_accepted_file_name("board."));
    }

    #[test]
    fn limits_are_described_for_people() {
        assert_eq!(format_limit(DEFAULT_MAX_UPLOAD_BYTES), "10 MiB");
        assert_eq!(format_limit(4096), "4096 bytes");
        assert_eq!(format_limit(3 * 1024 * 1024 + 1), "3145729 bytes");
    }

    #[test]
    fn settings_carry_the_configured_limit() {
        let settings = UploadSettings::with_limit(2048);
        assert_eq!(settings.max_upload_bytes, 2048);
        assert_eq!(settings.accepted_extensions, ACCEPTED_EXTENSIONS.to_vec());
        assert_eq!(UploadSettings::default().max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn accept_attribute_lists_every_extension() {
        assert_eq!(accept_attribute(), ".jpg,.jpeg,.png,.bmp");
    }
}
