//! Profile URL assembly on top of the `url` crate's parser.

use linkskit_error::{BuildError, BuildErrorKind};
use percent_encoding::percent_decode_str;
use url::Url;

/// Host, optional fixed path segment, and whether the handle is `@`-prefixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ProfileTemplate<'a> {
    host: &'a str,
    prefix: Option<&'static str>,
    at_handle: bool,
}

impl<'a> ProfileTemplate<'a> {
    pub(crate) fn new(host: &'a str, prefix: Option<&'static str>, at_handle: bool) -> Self {
        Self {
            host,
            prefix,
            at_handle,
        }
    }

    #[cfg(test)]
    pub(crate) fn prefix(&self) -> Option<&'static str> {
        self.prefix
    }

    /// Produce `https://{host}/[{prefix}/][@]{handle}`.
    pub(crate) fn build(&self, handle: &str) -> Result<Url, BuildError> {
        let segment = handle_segment(handle, self.at_handle)?;
        let mut url = base_url(self.host)?;
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                BuildError::new(BuildErrorKind::MalformedUrl(format!(
                    "https://{}/ cannot be a base URL",
                    self.host
                )))
            })?;
            segments.pop_if_empty();
            if let Some(prefix) = self.prefix {
                segments.push(prefix);
            }
            segments.push(&segment);
        }
        verify_last_segment(&url, &segment, usize::from(self.prefix.is_some()) + 1)?;
        Ok(url)
    }
}

/// Parse `https://{host}/` and require that `host` contributed nothing but
/// a host and optional port.
pub(crate) fn base_url(host: &str) -> Result<Url, BuildError> {
    if host.trim().is_empty() {
        return Err(BuildError::new(BuildErrorKind::EmptyInstance));
    }
    // The parser strips tab and newline, and an empty port vanishes.
    if host.chars().any(|c| c.is_control()) || host.ends_with(':') {
        return Err(BuildError::new(BuildErrorKind::InvalidInstance(
            host.to_string(),
        )));
    }

    let url = Url::parse(&format!("https://{host}/"))
        .map_err(|e| BuildError::new(BuildErrorKind::MalformedUrl(format!("{e}: {host:?}"))))?;

    let bare = url.host().is_some()
        && url.username().is_empty()
        && url.password().is_none()
        && url.path() == "/"
        && url.query().is_none()
        && url.fragment().is_none();
    if !bare {
        return Err(BuildError::new(BuildErrorKind::InvalidInstance(
            host.to_string(),
        )));
    }

    Ok(url)
}

// Path segment pushing silently drops "." and "..", and strips tab and newline
// before that check, which would truncate or alter the URL.
fn handle_segment(handle: &str, at_handle: bool) -> Result<String, BuildError> {
    if handle.trim().is_empty() {
        return Err(BuildError::new(BuildErrorKind::EmptyHandle));
    }
    if handle.contains(['\t', '\n', '\r']) {
        return Err(BuildError::new(BuildErrorKind::InvalidHandle(
            handle.to_string(),
        )));
    }
    if at_handle {
        return Ok(format!("@{handle}"));
    }
    if matches!(handle, "." | "..") {
        return Err(BuildError::new(BuildErrorKind::InvalidHandle(
            handle.to_string(),
        )));
    }
    Ok(handle.to_string())
}

/// Require `segment_count` path segments, the last decoding to `segment`.
fn verify_last_segment(url: &Url, segment: &str, segment_count: usize) -> Result<(), BuildError> {
    let segments: Vec<&str> = url.path_segments().map(Iterator::collect).unwrap_or_default();
    let last = segments
        .last()
        .map(|s| percent_decode_str(s).decode_utf8_lossy());

    if segments.len() != segment_count || last.as_deref() != Some(segment) {
        return Err(BuildError::new(BuildErrorKind::MalformedUrl(format!(
            "{url} does not end in segment {segment:?}"
        ))));
    }
    Ok(())
}
