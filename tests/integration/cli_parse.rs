use clap::{CommandFactory, Parser};
use dcib_terminal::tooling::cli::{Cli, Commands};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["dcib-terminal"],
        vec!["dcib-terminal", "shell"],
        vec!["dcib-terminal", "banner"],
        vec!["dcib-terminal", "exec", "ls", "pwd"],
        vec!["dcib-terminal", "exec", "--format", "json", "cd secure"],
        vec!["dcib-terminal", "exec", "--script", "./session.txt"],
        vec!["dcib-terminal", "--tree", "./tree.toml", "--home", "/home/recruit", "shell"],
        vec!["dcib-terminal", "--log-level", "debug", "--log-output", "stderr"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_script_with_inline_lines() {
    let parsed = Cli::try_parse_from(["dcib-terminal", "exec", "--script", "s.txt", "ls"]);
    assert!(parsed.is_err());
}

#[test]
fn default_command_is_none() {
    let cli = Cli::try_parse_from(["dcib-terminal"]).unwrap();
    assert_eq!(cli.command, None);

    let cli = Cli::try_parse_from(["dcib-terminal", "exec", "pwd"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Exec {
            lines: vec!["pwd".to_string()],
            script: None,
            format: "text".to_string(),
        })
    );
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
