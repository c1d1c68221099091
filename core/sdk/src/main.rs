mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use cli::{config_to_command, parse_args, print_completion, print_help, Config, ParseOutcome};
use domain::SdkCommand;
use ports::inbound::UseCaseRunner;
use wiring::{wire_app, App};

const BIN_NAME: &str = "claude-sdk";

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config);
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = match cmd {
            SdkCommand::Help => {
                print_help();
                Ok(0)
            }
            SdkCommand::Version => {
                println!("{} {}", BIN_NAME, env!("CARGO_PKG_VERSION"));
                Ok(0)
            }
            SdkCommand::Run(run_config) => {
                let base_dir = self.app.env_resolver.current_dir()?;
                self.app
                    .run_use_case
                    .run(&base_dir, &run_config)
                    .map(|outcome| outcome.exit_code())
            }
        };

        let code = result.as_ref().copied().unwrap_or(1);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self.app.logger.log(
                &LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

fn cmd_name_for_log(cmd: &SdkCommand) -> &'static str {
    match cmd {
        SdkCommand::Help => "help",
        SdkCommand::Version => "version",
        SdkCommand::Run(c) if c.flags.dry_run => "dry-run",
        SdkCommand::Run(_) => "run",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", BIN_NAME, e);
            if e.is_usage() {
                print_usage();
            }
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
        ParseOutcome::Passthrough(rest) => {
            let app = wire_app(false);
            return app.passthrough.run(&rest);
        }
    };
    let app = wire_app(config.verbose);
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: {} [options]  (see --help)", BIN_NAME);
}
