use clap::{CommandFactory, Parser};
use envmerge::tooling::cli::{Cli, Commands};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["envmerge", "apply"],
        vec!["envmerge", "apply", "--dry-run"],
        vec!["envmerge", "apply", "--format", "json"],
        vec!["envmerge", "show"],
        vec!["envmerge", "show", "--format", "json"],
        vec!["envmerge", "config"],
        vec![
            "envmerge",
            "--function-name",
            "fn",
            "--region",
            "eu-west-1",
            "--aws-bin",
            "/usr/local/bin/aws",
            "--profile",
            "ops",
            "apply",
        ],
        vec!["envmerge", "--config", "./envmerge.toml", "show"],
        vec![
            "envmerge",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--log-output",
            "file",
            "--log-file",
            "/tmp/envmerge.log",
            "config",
        ],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_requires_a_subcommand() {
    assert!(Cli::try_parse_from(["envmerge"]).is_err());
    assert!(Cli::try_parse_from(["envmerge", "deploy"]).is_err());
}

#[test]
fn unknown_output_format_is_a_usage_error() {
    for args in [
        vec!["envmerge", "apply", "--format", "yaml"],
        vec!["envmerge", "show", "--format", "xml"],
    ] {
        let err = Cli::try_parse_from(args.clone()).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue, "args: {args:?}");
        assert_eq!(err.exit_code(), 2);
    }
}

#[test]
fn apply_defaults_to_text_and_real_run() {
    let cli = Cli::try_parse_from(["envmerge", "apply"]).unwrap();
    assert_eq!(
        cli.command,
        Commands::Apply {
            dry_run: false,
            format: "text".to_string()
        }
    );
    assert!(cli.config.is_none());
}

#[test]
fn help_lists_every_command() {
    let help = Cli::command().render_long_help().to_string();
    for name in ["apply", "show", "config"] {
        assert!(help.contains(name), "help missing {name}: {help}");
    }
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}
