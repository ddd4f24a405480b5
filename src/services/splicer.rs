// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};

pub const START_MARKER: &str = "<!-- LANGUAGE_STATS_START -->";
pub const END_MARKER: &str = "<!-- LANGUAGE_STATS_END -->";

const TITLE: &str = "## 📊 Language Stats";
const COMMENT_CLOSE: &str = "-->";

/// Starting content when the document does not exist yet.
pub const DEFAULT_DOCUMENT: &str = "# GitHub Profile\n\n";

/// Wrap a rendered table in the markers and section title.
pub fn build_section(table: &str) -> String {
    format!("{START_MARKER}\n{TITLE}\n\n{table}\n\n{END_MARKER}")
}

/// Place `section` into `document`.
///
/// - both markers, start first: the span from the first start marker through
///   the first end marker after it is replaced
/// - no markers: inserted right after the first `-->`, or appended if there is
///   none
///
/// Returns `None` for any other marker layout: a lone marker, or no end marker
/// after the first start marker.
pub fn splice(document: &str, section: &str) -> Option<String> {
    let start = document.find(START_MARKER);
    let has_end = document.contains(END_MARKER);

    match start {
        Some(start) => {
            let after_start = start + START_MARKER.len();
            let end = after_start + document[after_start..].find(END_MARKER)?;
            let after_end = end + END_MARKER.len();

            let mut out = String::with_capacity(document.len() + section.len());
            out.push_str(&document[..start]);
            out.push_str(section);
            out.push_str(&document[after_end..]);
            Some(out)
        }
        None if has_end => None,
        None => Some(insert_section(document, section)),
    }
}

fn insert_section(document: &str, section: &str) -> String {
    let mut out = String::with_capacity(document.len() + section.len() + 2);
    match document.find(COMMENT_CLOSE) {
        Some(pos) => {
            let split = pos + COMMENT_CLOSE.len();
            out.push_str(&document[..split]);
            out.push_str("\n\n");
            out.push_str(section);
            out.push_str(&document[split..]);
        }
        None => {
            out.push_str(document);
            out.push_str("\n\n");
            out.push_str(section);
        }
    }
    out
}

/// Read the document, falling back to [`DEFAULT_DOCUMENT`] when it can't be read.
pub fn read_document(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "document missing, starting from default");
            DEFAULT_DOCUMENT.to_string()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read document, starting from default");
            DEFAULT_DOCUMENT.to_string()
        }
    }
}

/// Read, splice and rewrite the document at `path` with a fresh stats table.
pub fn update_document(path: &Path, table: &str) -> Result<()> {
    let content = read_document(path);
    let section = build_section(table);

    let Some(updated) = splice(&content, &section) else {
        return Err(Error::MalformedMarkers {
            path: path.to_path_buf(),
        });
    };

    fs::write(path, updated)?;
    Ok(())
}
