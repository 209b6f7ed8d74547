//! Icon resolution and data URL normalization
//!
//! Icons arrive as local files or HTTP(S) URLs and are normalized to a
//! single `data:<mime>;base64,<payload>` representation. Only PNG and SVG
//! are accepted; any other MIME type or extension is a resolution failure.

use std::fs;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use super::Chain;
use crate::error::ResolutionError;

/// PNG MIME type
pub const MIME_PNG: &str = "image/png";
/// SVG MIME type
pub const MIME_SVG: &str = "image/svg+xml";

/// Inputs for resolving one icon through its fallback chain.
pub struct IconSpec<'a> {
    /// Field name used in error messages, e.g. "light mode icon"
    pub target: &'static str,
    /// Explicit file path, if configured
    pub file: Option<&'a str>,
    /// Explicit URL, if configured
    pub url: Option<&'a str>,
    /// Conventional default filename looked up under `base_dir`
    pub default_name: &'static str,
    /// Env key naming the file option, for the exhausted-chain message
    pub file_key: &'static str,
    /// Env key naming the URL option, for the exhausted-chain message
    pub url_key: &'static str,
    /// Directory that relative paths and the default file resolve against
    pub base_dir: &'a Path,
    /// Fully resolved sibling value to inherit (dark falls back to light)
    pub fallback: Option<&'a str>,
}

/// Resolve an icon to a data URL through the standard chain:
/// explicit file, explicit URL, default-named local file, then the
/// sibling fallback when one is given.
///
/// # Errors
///
/// Fails when an explicitly specified candidate is unusable, or when the
/// chain is exhausted and no sibling fallback applies.
pub fn resolve(spec: IconSpec<'_>) -> Result<String, ResolutionError> {
    let IconSpec {
        target,
        file,
        url,
        default_name,
        file_key,
        url_key,
        base_dir,
        fallback,
    } = spec;

    let help = format!(
        "Provide one of the following:\n\
         1. Place an '{default_name}' file in the working directory\n\
         2. Set {file_key} to point to your icon file\n\
         3. Set {url_key} to an icon URL"
    );

    Chain::new(target)
        .candidate("icon file", || match file {
            Some(path) => file_to_data_url(&resolve_path(base_dir, path)).map(Some),
            None => Ok(None),
        })
        .candidate("icon URL", || match url {
            Some(url) => fetch_to_data_url(url).map(Some),
            None => Ok(None),
        })
        .candidate("default icon file", || {
            let default = base_dir.join(default_name);
            if default.exists() {
                file_to_data_url(&default).map(Some)
            } else {
                Ok(None)
            }
        })
        .candidate("inherited icon", || Ok(fallback.map(str::to_string)))
        .help(help)
        .resolve()
}

fn resolve_path(base_dir: &Path, path: &str) -> std::path::PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Read a PNG or SVG file and encode it as a data URL.
///
/// # Errors
///
/// Returns a plain-text reason when the file is missing, unreadable, or
/// not a supported image format.
pub fn file_to_data_url(path: &Path) -> Result<String, String> {
    if !path.exists() {
        return Err(format!("icon file not found: {}", path.display()));
    }

    let mime = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(mime_for_extension)
        .ok_or_else(|| format!("unsupported image format: {}", path.display()))?;

    let content = fs::read(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;

    Ok(encode_data_url(mime, &content))
}

/// Download an icon over HTTP(S) and encode it as a data URL.
///
/// Redirects are followed; any transport failure or non-2xx status is
/// reported as a plain-text reason, never a raw transport error.
///
/// # Errors
///
/// Returns a plain-text reason on fetch failure or unsupported MIME type.
pub fn fetch_to_data_url(url: &str) -> Result<String, String> {
    let response =
        reqwest::blocking::get(url).map_err(|e| format!("failed to download {url}: {e}"))?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("failed to download {url}: HTTP {}", status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase();

    let mime = if content_type.contains("svg") {
        MIME_SVG
    } else if content_type.contains("png") {
        MIME_PNG
    } else {
        // Server did not say; fall back to the URL's extension
        let path = url.split(['?', '#']).next().unwrap_or(url).to_ascii_lowercase();
        if path.ends_with(".svg") {
            MIME_SVG
        } else if path.ends_with(".png") {
            MIME_PNG
        } else {
            return Err(format!(
                "unsupported icon MIME type '{content_type}' from {url}"
            ));
        }
    };

    let bytes = response
        .bytes()
        .map_err(|e| format!("failed to read icon body from {url}: {e}"))?;

    Ok(encode_data_url(mime, &bytes))
}

/// Encode raw image bytes as `data:<mime>;base64,<payload>`.
#[must_use]
pub fn encode_data_url(mime: &str, content: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64.encode(content))
}

/// Split a data URL into its MIME type and decoded payload.
///
/// # Errors
///
/// Returns a plain-text reason when the value is not a base64 data URL
/// or the MIME type is not PNG/SVG.
pub fn decode_data_url(data_url: &str) -> Result<(&str, Vec<u8>), String> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| "not a data URL".to_string())?;
    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| "invalid data URL format".to_string())?;

    if mime != MIME_PNG && mime != MIME_SVG {
        return Err(format!("unsupported MIME type: {mime}"));
    }

    let content = BASE64
        .decode(payload)
        .map_err(|e| format!("invalid base64 payload: {e}"))?;

    Ok((mime, content))
}

/// MIME type for a supported image file extension.
#[must_use]
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some(MIME_PNG),
        "svg" => Some(MIME_SVG),
        _ => None,
    }
}

/// File extension for a supported MIME type.
#[must_use]
pub fn extension_for_mime(mime: &str) -> Option<&'static str> {
    match mime {
        MIME_PNG => Some("png"),
        MIME_SVG => Some("svg"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const PNG_STUB: &[u8] = b"\x89PNG\r\n\x1a\nstub";

    #[test]
    fn test_file_to_data_url_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logo.png");
        fs::write(&path, PNG_STUB).unwrap();

        let data_url = file_to_data_url(&path).unwrap();
        assert!(data_url.starts_with("data:image/png;base64,"));

        let (mime, content) = decode_data_url(&data_url).unwrap();
        assert_eq!(mime, MIME_PNG);
        assert_eq!(content, PNG_STUB);
    }

    #[test]
    fn test_file_to_data_url_rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logo.gif");
        fs::write(&path, b"GIF89a").unwrap();

        let err = file_to_data_url(&path).unwrap_err();
        assert!(err.contains("unsupported image format"));
    }

    #[test]
    fn test_file_to_data_url_missing_file() {
        let err = file_to_data_url(Path::new("/no/such/icon.png")).unwrap_err();
        assert!(err.contains("not found"));
    }

    #[test]
    fn test_resolve_explicit_file_beats_default() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("custom.png"), b"custom").unwrap();
        fs::write(dir.path().join("icon-lightmode.png"), b"default").unwrap();

        let data_url = resolve(IconSpec {
            target: "light mode icon",
            file: Some("custom.png"),
            url: None,
            default_name: "icon-lightmode.png",
            file_key: "DATASOURCE_ICON_FILENAME_LIGHTMODE",
            url_key: "DATASOURCE_ICON_URL_LIGHTMODE",
            base_dir: dir.path(),
            fallback: None,
        })
        .unwrap();

        assert_eq!(data_url, encode_data_url(MIME_PNG, b"custom"));
    }

    #[test]
    fn test_resolve_specified_but_missing_file_fails_fast() {
        let dir = TempDir::new().unwrap();
        // A default file exists, but the explicit candidate must not fall
        // through to it.
        fs::write(dir.path().join("icon-lightmode.png"), b"default").unwrap();

        let err = resolve(IconSpec {
            target: "light mode icon",
            file: Some("missing.png"),
            url: None,
            default_name: "icon-lightmode.png",
            file_key: "DATASOURCE_ICON_FILENAME_LIGHTMODE",
            url_key: "DATASOURCE_ICON_URL_LIGHTMODE",
            base_dir: dir.path(),
            fallback: None,
        })
        .unwrap_err();

        match err {
            ResolutionError::InvalidCandidate { candidate, .. } => {
                assert_eq!(candidate, "icon file");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_falls_back_to_sibling() {
        let dir = TempDir::new().unwrap();
        let light = encode_data_url(MIME_PNG, b"light");

        let dark = resolve(IconSpec {
            target: "dark mode icon",
            file: None,
            url: None,
            default_name: "icon-darkmode.png",
            file_key: "DATASOURCE_ICON_FILENAME_DARKMODE",
            url_key: "DATASOURCE_ICON_URL_DARKMODE",
            base_dir: dir.path(),
            fallback: Some(&light),
        })
        .unwrap();

        assert_eq!(dark, light);
    }

    #[test]
    fn test_resolve_exhausted_lists_all_options() {
        let dir = TempDir::new().unwrap();

        let err = resolve(IconSpec {
            target: "light mode icon",
            file: None,
            url: None,
            default_name: "icon-lightmode.png",
            file_key: "DATASOURCE_ICON_FILENAME_LIGHTMODE",
            url_key: "DATASOURCE_ICON_URL_LIGHTMODE",
            base_dir: dir.path(),
            fallback: None,
        })
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("icon-lightmode.png"));
        assert!(message.contains("DATASOURCE_ICON_FILENAME_LIGHTMODE"));
        assert!(message.contains("DATASOURCE_ICON_URL_LIGHTMODE"));
    }

    #[test]
    fn test_decode_data_url_rejects_other_mime() {
        let err = decode_data_url("data:image/gif;base64,R0lGOD==").unwrap_err();
        assert!(err.contains("unsupported MIME type"));
    }

    #[test]
    fn test_extension_mime_mapping() {
        assert_eq!(mime_for_extension("PNG"), Some(MIME_PNG));
        assert_eq!(mime_for_extension("svg"), Some(MIME_SVG));
        assert_eq!(mime_for_extension("jpeg"), None);
        assert_eq!(extension_for_mime(MIME_SVG), Some("svg"));
        assert_eq!(extension_for_mime("image/webp"), None);
    }
}
