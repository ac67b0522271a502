mod common;

use predicates::prelude::PredicateBooleanExt;

use nurpg_core::AnyEmptyResult;

#[test]
fn status_reports_a_valid_document() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::setup_project(tmp.path(), common::SAMPLE_DOCUMENT)?;

	let mut cmd = common::nurpgd_cmd();
	let _ = cmd
		.arg("status")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Document is valid!"))
		.stdout(predicates::str::contains("Document title: The Book"))
		.stdout(predicates::str::contains("Document authors: Jane Doe, Sam Roe"))
		.stdout(predicates::str::contains("Document sections: 2"));

	Ok(())
}

#[test]
fn status_without_title_is_untitled() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::setup_project(tmp.path(), "@section Only\n")?;

	let mut cmd = common::nurpgd_cmd();
	let _ = cmd
		.arg("status")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Document title: (untitled)"))
		.stdout(predicates::str::contains("Document authors").not());

	Ok(())
}

#[test]
fn status_fails_on_bad_document() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::setup_project(tmp.path(), "@section Combat\n@sparkle shiny\n")?;

	let mut cmd = common::nurpgd_cmd();
	let _ = cmd
		.arg("status")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("Document is invalid!"))
		.stderr(predicates::str::contains("unknown directive"));

	Ok(())
}

#[test]
fn status_fails_on_unterminated_directive() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::setup_project(tmp.path(), "@section Combat")?;

	let mut cmd = common::nurpgd_cmd();
	let _ = cmd
		.arg("status")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("never terminated"));

	Ok(())
}

#[test]
fn status_fails_when_document_is_missing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::setup_project(tmp.path(), "")?;
	std::fs::remove_file(tmp.path().join("rules.nrpg"))?;

	let mut cmd = common::nurpgd_cmd();
	let _ = cmd
		.arg("status")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("not found"))
		.stderr(predicates::str::contains("Document is invalid!").not());

	Ok(())
}

#[test]
fn status_requires_configuration() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let mut cmd = common::nurpgd_cmd();
	let _ = cmd
		.arg("status")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(10)
		.stderr(predicates::str::contains("valid NDS configuration was not found"));

	Ok(())
}

#[test]
fn debug_flag_logs_to_stderr() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::setup_project(tmp.path(), common::SAMPLE_DOCUMENT)?;

	let mut cmd = common::nurpgd_cmd();
	let _ = cmd
		.arg("status")
		.arg("--debug")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stderr(predicates::str::contains("parsed document"));

	Ok(())
}

#[test]
fn quiet_flag_wins_over_debug() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::setup_project(tmp.path(), common::SAMPLE_DOCUMENT)?;

	let mut cmd = common::nurpgd_cmd();
	let _ = cmd
		.arg("status")
		.arg("-D")
		.arg("-q")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stderr(predicates::str::is_empty());

	Ok(())
}
