use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::NurpgError;
use crate::NurpgResult;

/// Directory holding the project state, relative to the project root.
pub const NDS_DIR: &str = ".nds";
/// Configuration file name inside [`NDS_DIR`].
pub const CONFIG_FILE_NAME: &str = "config";
/// Default stash directory, relative to the project root.
pub const DEFAULT_STASH_DIR: &str = ".nds/stash";

/// Project configuration stored as JSON in `.nds/config`.
///
/// ```json
/// {
///   "document_file": "rules.nrpg",
///   "stash_dir": ".nds/stash",
///   "stash_stack": ["6f1c..."]
/// }
/// ```
///
/// Relative paths are resolved against the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NdsConfig {
	/// The document this project manages.
	pub document_file: PathBuf,
	/// Where stashed drafts are kept.
	#[serde(default = "default_stash_dir")]
	pub stash_dir: PathBuf,
	/// Stashed draft ids, most recent last.
	#[serde(default)]
	pub stash_stack: Vec<String>,
}

fn default_stash_dir() -> PathBuf {
	PathBuf::from(DEFAULT_STASH_DIR)
}

impl NdsConfig {
	pub fn new(document_file: impl Into<PathBuf>) -> Self {
		Self {
			document_file: document_file.into(),
			stash_dir: default_stash_dir(),
			stash_stack: vec![],
		}
	}

	/// Path of the configuration file for the project at `root`.
	pub fn path(root: &Path) -> PathBuf {
		root.join(NDS_DIR).join(CONFIG_FILE_NAME)
	}

	pub fn exists(root: &Path) -> bool {
		Self::path(root).is_file()
	}

	/// Create `.nds/`, the stash directory and a fresh configuration for
	/// `document_file`. Refuses to overwrite an existing configuration.
	pub fn init(root: &Path, document_file: impl Into<PathBuf>) -> NurpgResult<Self> {
		if Self::exists(root) {
			return Err(NurpgError::ConfigExists);
		}

		let config = Self::new(document_file);
		std::fs::create_dir_all(root.join(NDS_DIR))?;
		std::fs::create_dir_all(config.stash_path(root))?;
		config.save(root)?;
		tracing::info!(root = %root.display(), "initialized configuration");

		Ok(config)
	}

	/// Load the configuration for the project at `root`.
	pub fn load(root: &Path) -> NurpgResult<Self> {
		let path = Self::path(root);
		if !path.is_file() {
			return Err(NurpgError::ConfigNotFound);
		}

		let content = std::fs::read_to_string(&path)?;
		serde_json::from_str(&content).map_err(|e| NurpgError::ConfigParse(e.to_string()))
	}

	pub fn save(&self, root: &Path) -> NurpgResult<()> {
		let payload =
			serde_json::to_string_pretty(self).map_err(|e| NurpgError::ConfigParse(e.to_string()))?;
		std::fs::write(Self::path(root), payload)?;

		Ok(())
	}

	/// The managed document, resolved against `root`.
	pub fn document_path(&self, root: &Path) -> PathBuf {
		root.join(&self.document_file)
	}

	/// The stash directory, resolved against `root`.
	pub fn stash_path(&self, root: &Path) -> PathBuf {
		root.join(&self.stash_dir)
	}

	/// Copy `file` into the stash under a fresh id, record it and save the
	/// configuration. Returns the stash id.
	pub fn stash_push(&mut self, root: &Path, file: &Path) -> NurpgResult<String> {
		let stash_id = Uuid::new_v4().to_string();
		let stash_dir = self.stash_path(root);

		std::fs::create_dir_all(&stash_dir)?;
		std::fs::copy(file, stash_dir.join(&stash_id))?;
		self.stash_stack.push(stash_id.clone());
		self.save(root)?;
		tracing::debug!(%stash_id, file = %file.display(), "stashed document");

		Ok(stash_id)
	}

	/// Remove the most recent stash entry and return the path of its file.
	/// Returns `None` when the stash is empty. The file itself is left in
	/// place for the caller to consume.
	pub fn stash_pop(&mut self, root: &Path) -> NurpgResult<Option<PathBuf>> {
		let Some(stash_id) = self.stash_stack.pop() else {
			return Ok(None);
		};

		self.save(root)?;
		let path = self.stash_path(root).join(&stash_id);
		if !path.is_file() {
			tracing::warn!(%stash_id, "stash entry has no file");
		}

		Ok(Some(path))
	}
}
