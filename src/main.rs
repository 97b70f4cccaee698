use std::process::ExitCode;

use bitexpr::{
    config::{Config, LogLevel},
    evaluate,
    interpreter::batch::split_batch,
    logging::init_logging,
    util::format::OutputBase,
};
use clap::Parser;
use tracing::{error, info};

/// bitexpr evaluates bitwise expressions over binary, decimal and hexadecimal
/// numbers.
///
/// Separate several expressions with `,` or `;`, for example
/// `bitexpr '5 & 3,' '~0x1F | 2'`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base used to print results. Overrides `BITEXPR_BASE`.
    #[arg(short, long, value_enum)]
    base: Option<OutputBase>,

    /// Only print the results, without the expressions.
    #[arg(short, long)]
    quiet: bool,

    /// Report failing expressions and continue with the rest of the batch.
    #[arg(short, long)]
    keep_going: bool,

    /// Log level. Overrides `BITEXPR_LOG_LEVEL`.
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Expression fragments.
    #[arg(required = true)]
    expressions: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => config.apply_overrides(args.log_level, args.base),
        Err(e) => {
            init_logging(&Config::default());
            error!(error = %e, "invalid configuration");
            eprintln!("{e}");
            return ExitCode::from(2);
        },
    };
    init_logging(&config);
    info!(version = env!("CARGO_PKG_VERSION"), base = ?config.output_base, "starting bitexpr");

    let mut failed = false;

    for expression in split_batch(&args.expressions) {
        match evaluate(&expression) {
            Ok(evaluation) => {
                let result = config.output_base.format(evaluation.result);
                if args.quiet {
                    println!("{result}");
                } else {
                    println!("{} = {result}", evaluation.operation);
                }
            },
            Err(e) => {
                eprintln!("{e}");
                failed = true;
                if !args.keep_going {
                    break;
                }
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
