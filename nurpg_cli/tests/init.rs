mod common;

use nurpg_core::AnyEmptyResult;

#[test]
fn can_init() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let mut cmd = common::nurpgd_cmd();
	let _ = cmd
		.arg("init")
		.arg("rules.nrpg")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Writing document configuration."))
		.stdout(predicates::str::contains("Initialization OK."));

	let config_content = std::fs::read_to_string(tmp.path().join(".nds/config"))?;
	assert!(config_content.contains("\"document_file\": \"rules.nrpg\""));
	assert!(config_content.contains("\"stash_dir\": \".nds/stash\""));
	assert!(tmp.path().join(".nds/stash").is_dir());

	Ok(())
}

#[test]
fn init_does_not_overwrite() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join(".nds"))?;
	std::fs::write(tmp.path().join(".nds/config"), "existing config")?;

	let mut cmd = common::nurpgd_cmd();
	let _ = cmd
		.arg("init")
		.arg("rules.nrpg")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(10)
		.stderr(predicates::str::contains("pre-existing NDS configuration"));

	let config_content = std::fs::read_to_string(tmp.path().join(".nds/config"))?;
	assert_eq!(config_content, "existing config");

	Ok(())
}

#[test]
fn missing_subcommand_fails() -> AnyEmptyResult {
	let mut cmd = common::nurpgd_cmd();
	let _ = cmd
		.assert()
		.code(1)
		.stderr(predicates::str::contains("No subcommand specified"));

	Ok(())
}
