use crate::domain::run_config::DEFAULT_PROMPT_FILE;
use crate::domain::{OutputFormat, PromptSource, RunConfiguration, RunFlags, SdkCommand, ToolSelection};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::{ModelName, SessionName};
use common::error::Error;
use std::path::PathBuf;

/// パススルーモードのフラグ（argv の先頭でのみ有効）
pub const SIMPLE_FLAG: &str = "--simple";

const BIN_NAME: &str = "claude-sdk";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    pub version: bool,
    pub prompt_file: PathBuf,
    /// --prompt: 指定されればプロンプトファイルより優先
    pub prompt: Option<String>,
    pub return_output: bool,
    pub session_name: Option<SessionName>,
    pub output: Option<PathBuf>,
    pub output_format: OutputFormat,
    pub system_prompt: Option<String>,
    pub model: Option<ModelName>,
    /// -t/--tools（複数回・複数値可。順序を保つ）
    pub tools: Vec<String>,
    pub all_tools: bool,
    pub verbose: bool,
    pub dry_run: bool,
    pub no_stream: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            version: false,
            prompt_file: PathBuf::from(DEFAULT_PROMPT_FILE),
            prompt: None,
            return_output: false,
            session_name: None,
            output: None,
            output_format: OutputFormat::Text,
            system_prompt: None,
            model: None,
            tools: Vec::new(),
            all_tools: false,
            verbose: false,
            dry_run: false,
            no_stream: false,
        }
    }
}

/// 解析結果: 通常の Config / パススルー / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    /// --simple: 残りの引数をそのまま外部 CLI に渡す
    Passthrough(Vec<String>),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new(BIN_NAME)
        .about("Run the claude CLI non-interactively with per-run session directories")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("version")
                .long("version")
                .help("Print version")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("prompt-file")
                .short('p')
                .long("prompt-file")
                .value_name("path")
                .help("File containing the prompt (default: prompt.txt)")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("prompt")
                .long("prompt")
                .value_name("text")
                .help("Prompt text (overrides --prompt-file)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("return-output")
                .long("return-output")
                .help("Print the output file content to stdout")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("session-name")
                .long("session-name")
                .value_name("name")
                .help("Suffix for the session directory name")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .value_name("path")
                .help("Copy the output file to this path")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("output-format")
                .long("output-format")
                .value_name("format")
                .help("Format of the final answer file")
                .value_parser(OutputFormat::VARIANTS)
                .default_value("text")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("system-prompt")
                .long("system-prompt")
                .value_name("text")
                .help("Text appended to the prompt (overrides .claude-sdk/system-prompt.txt)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Model passed to claude --model")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("tools")
                .short('t')
                .long("tools")
                .value_name("tool")
                .help("Allowed tools (default: Read Write Edit Glob Grep LS Bash)")
                .num_args(1..)
                .action(ArgAction::Append),
        )
        .arg(
            clap::Arg::new("all-tools")
                .long("all-tools")
                .help("Do not pass an allowed-tools list")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print the command line and debug logs to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("dry-run")
                .long("dry-run")
                .help("Show what would be run without creating files or starting claude")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("no-stream")
                .long("no-stream")
                .help("Do not relay claude's stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("simple")
                .long("simple")
                .hide(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Result<Config, Error> {
    let output_format = matches
        .get_one::<String>("output-format")
        .and_then(|s| s.parse::<OutputFormat>().ok())
        .unwrap_or_default();
    let session_name = matches
        .get_one::<String>("session-name")
        .map(|s| SessionName::parse(s))
        .transpose()?;
    Ok(Config {
        help: matches.get_flag("help"),
        version: matches.get_flag("version"),
        prompt_file: matches
            .get_one::<PathBuf>("prompt-file")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROMPT_FILE)),
        prompt: matches.get_one::<String>("prompt").cloned(),
        return_output: matches.get_flag("return-output"),
        session_name,
        output: matches.get_one::<PathBuf>("output").cloned(),
        output_format,
        system_prompt: matches.get_one::<String>("system-prompt").cloned(),
        model: matches
            .get_one::<String>("model")
            .map(|s| ModelName::new(s.clone())),
        tools: matches
            .get_many::<String>("tools")
            .map(|i| i.cloned().collect())
            .unwrap_or_default(),
        all_tools: matches.get_flag("all-tools"),
        verbose: matches.get_flag("verbose"),
        dry_run: matches.get_flag("dry-run"),
        no_stream: matches.get_flag("no-stream"),
    })
}

/// プロセスの引数を解析する
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let args: Vec<String> = std::env::args().collect();
    parse_args_from(&args)
}

/// 引数スライス（先頭はプログラム名）から解析する
///
/// `--simple` は先頭にあるときだけパススルーとして扱う。
/// それ以外の位置でフラグとして現れたら usage エラー（オプションの値としての `--simple` は clap に任せる）。
pub fn parse_args_from(args: &[String]) -> Result<ParseOutcome, Error> {
    if args.get(1).map(String::as_str) == Some(SIMPLE_FLAG) {
        return Ok(ParseOutcome::Passthrough(args[2..].to_vec()));
    }

    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.render().to_string().trim_end().to_string()))?;

    if matches.get_flag("simple") {
        return Err(Error::invalid_argument(format!(
            "{} must be the first argument",
            SIMPLE_FLAG
        )));
    }

    if let Some(shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(*shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)?))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
}

pub fn print_help() {
    println!("Usage: {} [options]", BIN_NAME);
    println!("       {} --simple [claude args...]", BIN_NAME);
    println!("Options:");
    println!("  -h, --help                 Show this help message");
    println!("      --version              Print version");
    println!("  -p, --prompt-file <path>   File containing the prompt (default: prompt.txt)");
    println!("      --prompt <text>        Prompt text (overrides --prompt-file)");
    println!("      --system-prompt <text> Text appended to the prompt.");
    println!("                             If omitted, .claude-sdk/system-prompt.txt is used, then a built-in default.");
    println!("      --output-format <fmt>  text or json (default: text). Selects output.txt or output.json.");
    println!("      --return-output        Print the output file content to stdout");
    println!("  -o, --output <path>        Copy the output file to <path>");
    println!("      --session-name <name>  Append _<name> to the session directory");
    println!("  -m, --model <model>        Model passed to claude");
    println!("  -t, --tools <tool>...      Allowed tools (default: Read Write Edit Glob Grep LS Bash)");
    println!("      --all-tools            Do not restrict tools");
    println!("  -v, --verbose              Print the command line and debug logs to stderr");
    println!("      --dry-run              Show what would run; no files, no process");
    println!("      --no-stream            Do not relay claude's stderr");
    println!("      --generate <shell>     Generate shell completion script (bash, zsh, fish)");
    println!("      --simple               (first argument only) Pass remaining arguments to claude -p");
    println!();
    println!("Environment:");
    println!("  CLAUDE_SDK_BIN   claude executable (default: claude on PATH)");
    println!("  CLAUDE_SDK_LOG   Append JSONL logs to this file");
    println!();
    println!("Sessions:");
    println!("  Each run creates .claude-sdk/<YYYYMMDD_HHMMSS>[_<name>]/ with conversation.json,");
    println!("  prompt.txt, system-prompt.txt and the output file written by claude.");
    println!();
    println!("Examples:");
    println!("  {} --prompt \"Summarize README.md\" --return-output", BIN_NAME);
    println!("  {} -p task.txt --output-format json -o result.json", BIN_NAME);
    println!("  {} --simple --model sonnet \"hello\"", BIN_NAME);
}

/// Config を SdkCommand に変換する
pub fn config_to_command(config: Config) -> SdkCommand {
    if config.help {
        return SdkCommand::Help;
    }
    if config.version {
        return SdkCommand::Version;
    }

    let prompt = match config.prompt {
        Some(text) if !text.trim().is_empty() => PromptSource::Literal(text),
        _ => PromptSource::File(config.prompt_file),
    };
    let tools = if config.all_tools {
        ToolSelection::All
    } else if config.tools.is_empty() {
        ToolSelection::Default
    } else {
        ToolSelection::Listed(config.tools)
    };

    SdkCommand::Run(RunConfiguration {
        prompt,
        system_prompt: config.system_prompt,
        output_format: config.output_format,
        model: config.model,
        tools,
        output_path: config.output,
        session_name: config.session_name,
        flags: RunFlags {
            verbose: config.verbose,
            dry_run: config.dry_run,
            no_stream: config.no_stream,
            return_output: config.return_output,
        },
    })
}
