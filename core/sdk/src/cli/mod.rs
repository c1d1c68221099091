//! CLI（引数解析と Config → Command 変換）

mod args;

pub use args::{
    config_to_command, parse_args, parse_args_from, print_completion, print_help, Config,
    ParseOutcome, SIMPLE_FLAG,
};
