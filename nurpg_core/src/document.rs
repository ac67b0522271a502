//! Reading and writing document files.

use std::path::Path;

use crate::Document;
use crate::NurpgError;
use crate::NurpgResult;
use crate::parse;

/// Largest document accepted by [`read`], in bytes (16 MB).
pub const MAX_DOCUMENT_SIZE: u64 = 16 * 1024 * 1024;

/// Read and parse the document at `path`.
///
/// Fails with [`NurpgError::DocumentNotFound`] when the file doesn't exist and
/// with [`NurpgError::DocumentTooLarge`] when it is [`MAX_DOCUMENT_SIZE`] bytes
/// or larger. Parse errors are returned unchanged.
pub fn read(path: impl AsRef<Path>) -> NurpgResult<Document> {
	let path = path.as_ref();

	if !path.exists() {
		return Err(NurpgError::DocumentNotFound {
			path: path.display().to_string(),
		});
	}

	let size = std::fs::metadata(path)?.len();
	if size >= MAX_DOCUMENT_SIZE {
		return Err(NurpgError::DocumentTooLarge {
			path: path.display().to_string(),
			size,
			limit: MAX_DOCUMENT_SIZE,
		});
	}

	let content = std::fs::read_to_string(path).inspect_err(|error| {
		tracing::error!(path = %path.display(), %error, "failed to read document file");
	})?;
	tracing::info!(bytes = content.len(), path = %path.display(), "read document");

	parse(&content)
}

/// Write `document` to `path` as directive text, replacing the file.
///
/// The text is parsed again before writing. When it doesn't rebuild the same
/// tree the file is left alone and [`NurpgError::UnstableFormat`] is returned.
pub fn write(document: &Document, path: impl AsRef<Path>) -> NurpgResult<()> {
	let path = path.as_ref();
	let text = document.to_directive_text();

	if !parse(&text)?.same_tree(document) {
		tracing::warn!(path = %path.display(), "formatted text does not match the document");
		return Err(NurpgError::UnstableFormat {
			path: path.display().to_string(),
		});
	}

	std::fs::write(path, &text)?;
	tracing::info!(bytes = text.len(), path = %path.display(), "wrote document");

	Ok(())
}
