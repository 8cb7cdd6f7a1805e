//! The single-file conversion pipeline: read a source file into a
//! [`MessageMap`] and serialize it into one output format.
//!
//! Each conversion is a straight-line read → model → write sequence with
//! no shared state; callers may run conversions for different files in
//! parallel without any synchronization.

use std::path::Path;

use crate::{
    error::Error, readers::SourceFormat, types::MessageMap, writers::OutputFormat,
};

/// Infers a [`SourceFormat`] from a file path's extension.
///
/// Returns `Some(SourceFormat)` if the extension matches a supported
/// source format, otherwise `None`.
///
/// # Example
/// ```rust
/// use slingcodec::readers::SourceFormat;
/// use slingcodec::transform::infer_source_format;
/// assert_eq!(infer_source_format("i18n/en.json"), Some(SourceFormat::Json));
/// assert_eq!(infer_source_format("i18n/en.XML"), Some(SourceFormat::Xml));
/// assert_eq!(infer_source_format("i18n/en.txt"), None);
/// ```
pub fn infer_source_format<P: AsRef<Path>>(path: P) -> Option<SourceFormat> {
    path.as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .and_then(SourceFormat::from_extension)
}

/// Reads an i18n source file into a [`MessageMap`].
///
/// The reader is selected by file extension; the language key is the
/// file's base name without extension (e.g. `i18n/de_DE.properties` →
/// `de_DE`).
pub fn read_message_map<P: AsRef<Path>>(path: P) -> Result<MessageMap, Error> {
    let path = path.as_ref();
    let format = infer_source_format(path).ok_or_else(|| {
        Error::UnsupportedFormat(format!(
            "unsupported file extension: {:?}",
            path.extension()
        ))
    })?;

    let entries = format.read(path)?;
    let language = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    Ok(MessageMap::new(language, entries))
}

/// Converts one i18n source file into one Sling i18n message file.
///
/// # Errors
///
/// Returns an `Error` if the source extension is unsupported, reading or
/// parsing fails, a leaf value is not a string, or the output file cannot
/// be written. The target file is not touched unless serialization
/// succeeded.
///
/// # Example
///
/// ```rust,no_run
/// use slingcodec::{transform, writers::OutputFormat};
/// transform("i18n/en.json", "target/en.json", OutputFormat::Json)?;
/// # Ok::<(), slingcodec::Error>(())
/// ```
pub fn transform<I: AsRef<Path>, O: AsRef<Path>>(
    input: I,
    output: O,
    output_format: OutputFormat,
) -> Result<(), Error> {
    let map = read_message_map(input)?;
    output_format.write_to(&map, output)
}
