// loader.rs - Reading confusable groups from text.
//
// Format: one group per line, members as comma-separated hexadecimal code
// points. Blank lines and lines starting with '#' are skipped.
//
//     # Latin a
//     0061,FF41,0430

use std::fs;
use std::io::Read;
use std::path::Path;

use memchr::memchr_iter;
use tracing::{debug, warn};

use crate::error::{HomoglyphError, Result};
use crate::group::ConfusableGroup;

/// Name of the bundled group table.
pub const DEFAULT_RESOURCE: &str = "char_codes.lst";

#[cfg(feature = "embedded")]
const EMBEDDED_TABLE: &str = include_str!("../assets/char_codes.lst");

/// Parse groups from the line format.
///
/// Tokens that are not hexadecimal, or that do not name a Unicode scalar
/// value, are skipped with a warning. Lines left without any member are
/// dropped.
pub fn parse_groups(text: &str) -> Vec<ConfusableGroup> {
    let mut groups = Vec::new();
    for (lineno, line) in lines(text) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut group = ConfusableGroup::new();
        for token in line.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            match u32::from_str_radix(token, 16).ok().and_then(char::from_u32) {
                Some(c) => {
                    group.insert(c);
                }
                None => warn!(line = lineno, token, "skipping invalid code point"),
            }
        }
        if !group.is_empty() {
            groups.push(group);
        }
    }
    groups
}

/// Read and parse groups from `reader`.
pub fn read_groups<R: Read>(mut reader: R) -> Result<Vec<ConfusableGroup>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_groups(&text))
}

/// Read and parse groups from the file at `path`.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<ConfusableGroup>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let groups = parse_groups(&text);
    debug!(path = %path.display(), groups = groups.len(), "loaded confusable groups");
    Ok(groups)
}

/// Look up a bundled resource by name.
pub fn resource(name: &str) -> Result<&'static str> {
    if name.is_empty() {
        return Err(HomoglyphError::InvalidArgument("name cannot be empty"));
    }
    bundled(name).ok_or_else(|| HomoglyphError::ResourceNotFound(name.to_string()))
}

#[cfg(feature = "embedded")]
fn bundled(name: &str) -> Option<&'static str> {
    (name == DEFAULT_RESOURCE).then_some(EMBEDDED_TABLE)
}

#[cfg(not(feature = "embedded"))]
fn bundled(_name: &str) -> Option<&'static str> {
    None
}

/// The bundled group table.
#[cfg(feature = "embedded")]
pub fn embedded_groups() -> Vec<ConfusableGroup> {
    parse_groups(EMBEDDED_TABLE)
}

/// Lines of `text` paired with their 1-based line number. Handles `\n` and
/// `\r\n` endings.
fn lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut ends = memchr_iter(b'\n', bytes).chain(std::iter::once(bytes.len()));
    std::iter::from_fn(move || {
        if start > bytes.len() {
            return None;
        }
        let end = ends.next()?;
        let line = text[start..end].strip_suffix('\r').unwrap_or(&text[start..end]);
        start = end + 1;
        Some(line)
    })
    .enumerate()
    .map(|(i, line)| (i + 1, line))
}
