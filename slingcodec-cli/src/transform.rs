//! Batch transformation of an i18n source tree.

use std::fs;
use std::path::Path;

use slingcodec::{OutputFormat, infer_source_format, transform};
use walkdir::WalkDir;

/// Outcome of a directory transformation.
#[derive(Debug, Default)]
pub struct Summary {
    pub transformed: usize,
    pub failed: usize,
}

/// Transforms every supported i18n file under `source` into `target`,
/// preserving relative paths and swapping the file extension for the
/// output format's one.
///
/// A file that fails to convert is reported on stderr and skipped; the
/// remaining files continue. Conversions are independent, so one bad
/// source never poisons the batch.
pub fn transform_directory(source: &Path, target: &Path, format: OutputFormat) -> Summary {
    let mut summary = Summary::default();

    for entry in WalkDir::new(source) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                eprintln!("warning: cannot access path: {e}");
                summary.failed += 1;
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || infer_source_format(path).is_none() {
            continue;
        }

        let relative = path.strip_prefix(source).unwrap_or(path);
        let target_file = target.join(relative).with_extension(format.extension());

        if let Err(e) = convert_file(path, &target_file, format) {
            eprintln!("Failed to transform {}: {e}", path.display());
            summary.failed += 1;
            continue;
        }

        println!("Transformed {} to {}", path.display(), target_file.display());
        summary.transformed += 1;
    }

    summary
}

fn convert_file(
    source: &Path,
    target: &Path,
    format: OutputFormat,
) -> Result<(), slingcodec::Error> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    transform(source, target, format)
}
