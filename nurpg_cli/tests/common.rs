use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub const SAMPLE_DOCUMENT: &str = "@title The Book\n@author Jane Doe\n@author Sam Roe\n@section \
                                   Combat\nRolling for initiative.\n@feature Quick Draw\n@mechanic \
                                   Reaction\n@cost 2\n@section Magic\n@ability Spark\n";

pub fn nurpgd_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("nurpgd"));
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}

/// Write `source` as `rules.nrpg` and point a fresh `.nds/config` at it.
#[allow(dead_code)]
pub fn setup_project(root: &Path, source: &str) -> std::io::Result<()> {
	std::fs::write(root.join("rules.nrpg"), source)?;
	std::fs::create_dir_all(root.join(".nds/stash"))?;
	std::fs::write(
		root.join(".nds/config"),
		"{\n  \"document_file\": \"rules.nrpg\"\n}",
	)?;

	Ok(())
}
