use clap::Parser;
use nurpg_cli::Commands;
use nurpg_cli::NurpgCli;
use nurpg_cli::StashCommands;
use nurpg_cli::log_level;
use nurpg_cli::parse_kind;
use nurpg_core::AnyEmptyResult;
use nurpg_core::NodeKind;
use rstest::rstest;

#[rstest]
#[case::default(false, false, "warn")]
#[case::debug(true, false, "debug")]
#[case::quiet(false, true, "error")]
#[case::quiet_wins(true, true, "error")]
fn verbosity_flags_pick_log_level(
	#[case] debug: bool,
	#[case] quiet: bool,
	#[case] expected: &str,
) {
	assert_eq!(log_level(debug, quiet), expected);
}

#[test]
fn parses_find_arguments() -> AnyEmptyResult {
	let cli = NurpgCli::try_parse_from(["nurpgd", "find", "Cost", "--content", "2", "-D"])?;
	assert!(cli.debug);

	let Some(Commands::Find { kind, content }) = cli.command else {
		panic!("expected the find command");
	};
	assert_eq!(kind, NodeKind::Cost);
	assert_eq!(content.as_deref(), Some("2"));

	Ok(())
}

#[test]
fn parses_stash_subcommands() -> AnyEmptyResult {
	let cli = NurpgCli::try_parse_from(["nurpgd", "stash", "pop", "-q"])?;
	assert!(cli.quiet);
	assert!(matches!(
		cli.command,
		Some(Commands::Stash {
			command: StashCommands::Pop
		})
	));

	Ok(())
}

#[test]
fn unknown_kind_is_rejected() {
	assert!(parse_kind("sparkle").is_err());
	assert_eq!(parse_kind("SECTION"), Ok(NodeKind::Section));
}
