use crate::cli::{parse_args_from, Config, ParseOutcome};
use crate::ports::inbound::UseCaseRunner;
use crate::wiring;
use common::error::Error;

/// 標準アダプターで App を組み立て、Runner で run する（テスト用の入口）
fn run_app(config: Config) -> Result<i32, Error> {
    let app = wiring::wire_app(config.verbose);
    let runner = crate::Runner { app };
    runner.run(config)
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_run_app_with_help() {
    let config = Config {
        help: true,
        ..Default::default()
    };
    assert_eq!(run_app(config).unwrap(), 0);
}

#[test]
fn test_run_app_with_version() {
    let config = Config {
        version: true,
        ..Default::default()
    };
    assert_eq!(run_app(config).unwrap(), 0);
}

#[test]
fn test_run_app_missing_prompt_file() {
    let config = Config {
        prompt_file: "definitely-missing-prompt-file.txt".into(),
        ..Default::default()
    };
    let err = run_app(config).unwrap_err();
    assert!(matches!(err, Error::MissingInput(_)));
    assert!(err.to_string().contains("Prompt file not found"));
    assert_eq!(err.exit_code(), 1);
    assert!(!err.is_usage());
}

#[test]
fn test_misplaced_simple_is_usage_error() {
    let err = parse_args_from(&args(&["claude-sdk", "-v", "--simple"])).unwrap_err();
    assert!(err.is_usage());
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_leading_simple_is_passthrough() {
    match parse_args_from(&args(&["claude-sdk", "--simple", "--model", "opus", "hi"])).unwrap() {
        ParseOutcome::Passthrough(rest) => assert_eq!(rest, args(&["--model", "opus", "hi"])),
        other => panic!("expected passthrough, got {:?}", other),
    }
}
