mod common;

use nurpg_core::AnyEmptyResult;

#[test]
fn find_prints_matching_nodes_in_order() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::setup_project(tmp.path(), common::SAMPLE_DOCUMENT)?;

	let mut cmd = common::nurpgd_cmd();
	let _ = cmd
		.arg("find")
		.arg("section")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("@section Combat\n@section Magic\n");

	Ok(())
}

#[test]
fn find_ignores_kind_case() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::setup_project(tmp.path(), common::SAMPLE_DOCUMENT)?;

	let mut cmd = common::nurpgd_cmd();
	let _ = cmd
		.arg("find")
		.arg("MECHANIC")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("@mechanic Reaction\n");

	Ok(())
}

#[test]
fn find_filters_by_content() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::setup_project(tmp.path(), common::SAMPLE_DOCUMENT)?;

	let mut cmd = common::nurpgd_cmd();
	let _ = cmd
		.arg("find")
		.arg("section")
		.arg("--content")
		.arg("Magic")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("@section Magic\n");

	Ok(())
}

#[test]
fn find_exits_with_not_found() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::setup_project(tmp.path(), common::SAMPLE_DOCUMENT)?;

	let mut cmd = common::nurpgd_cmd();
	let _ = cmd
		.arg("find")
		.arg("aspect")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(100)
		.stderr(predicates::str::contains("no `aspect` nodes found"));

	Ok(())
}

#[test]
fn find_rejects_unknown_kind() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::setup_project(tmp.path(), common::SAMPLE_DOCUMENT)?;

	let mut cmd = common::nurpgd_cmd();
	let _ = cmd
		.arg("find")
		.arg("sparkle")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.stderr(predicates::str::contains("unknown directive"));

	Ok(())
}

#[test]
fn fmt_rewrites_document_canonically() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::setup_project(
		tmp.path(),
		"@section Combat\n  Some text.\nMore text.  \n@note a|b\n@halt\nignored\n",
	)?;

	let mut cmd = common::nurpgd_cmd();
	let _ = cmd
		.arg("fmt")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Formatted"));

	let formatted = "@section Combat\nSome text.\nMore text.\n@note a|b\n";
	assert_eq!(std::fs::read_to_string(tmp.path().join("rules.nrpg"))?, formatted);

	let mut cmd = common::nurpgd_cmd();
	let _ = cmd
		.arg("fmt")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();
	assert_eq!(std::fs::read_to_string(tmp.path().join("rules.nrpg"))?, formatted);

	Ok(())
}

#[test]
fn fmt_leaves_the_file_alone_when_it_cannot_round_trip() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let source = "@section S\nline one\nline two\n@author A\nline three\nline four\n";
	common::setup_project(tmp.path(), source)?;

	let mut cmd = common::nurpgd_cmd();
	let _ = cmd
		.arg("fmt")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("formatting would change the document"));
	assert_eq!(std::fs::read_to_string(tmp.path().join("rules.nrpg"))?, source);

	Ok(())
}
