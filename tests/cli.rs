use clap::Parser;
use extractor_fixtures::cli::{Cli, Commands, OutputFormat, SampleCommand};

#[test]
fn greet_name_is_optional() {
    // When
    let cmd = Cli::parse_from(["fixtures", "greet"]);

    // Then
    match cmd.command {
        Commands::Greet(args) => assert!(args.name.is_none()),
        _ => panic!("expected Greet command"),
    }
}

#[test]
fn global_flags_after_subcommand() {
    let cmd = Cli::parse_from(["fixtures", "greeter", "Ada", "--prefix", "yo", "--format", "json", "--quiet"]);

    assert!(cmd.quiet);
    assert_eq!(cmd.format, Some(OutputFormat::Json));
    match cmd.command {
        Commands::Greeter(args) => {
            assert_eq!(args.name, "Ada");
            assert_eq!(args.prefix.as_deref(), Some("yo"));
        }
        _ => panic!("expected Greeter command"),
    }
}

#[test]
fn sample_sum_accepts_two_or_three_terms() {
    let two = Cli::parse_from(["fixtures", "sample", "sum", "1", "2"]);
    let three = Cli::parse_from(["fixtures", "sample", "sum", "1", "-2", "3"]);

    match (two.command, three.command) {
        (Commands::Sample(a), Commands::Sample(b)) => {
            assert!(matches!(a.command, SampleCommand::Sum { a: 1, b: 2, c: None }));
            assert!(matches!(b.command, SampleCommand::Sum { a: 1, b: -2, c: Some(3) }));
        }
        _ => panic!("expected Sample commands"),
    }
}

#[test]
fn completions_reject_both_targets() {
    let res = Cli::try_parse_from(["fixtures", "completions", "bash", "--stdout", "--out-dir", "x"]);
    assert!(res.is_err());
}

#[test]
fn ids_must_be_numeric() {
    assert!(Cli::try_parse_from(["fixtures", "user", "alice"]).is_err());
}
