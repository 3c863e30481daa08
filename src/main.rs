use clap::Parser;

mod commands;
mod output;

use commands::wrap;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "debug-guard")]
#[command(version = VERSION)]
#[command(about = "Wrap console.log/warn/debug calls in TypeScript sources with a DEBUG check")]
struct Cli {
    #[command(flatten)]
    args: wrap::WrapArgs,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let json = cli.args.json;

    let result = wrap::run(&cli.args);

    let exit_code = match result {
        Ok((data, exit_code)) => {
            if json {
                if let Err(err) = output::print_json_result(Ok(data)) {
                    let _ = output::print_error_text(&err);
                    return std::process::ExitCode::from(exit_code_to_u8(1));
                }
            }
            exit_code
        }
        Err(err) => {
            let exit_code = output::exit_code_for_error(err.code);
            let _ = if json {
                output::print_json_result::<serde_json::Value>(Err(err))
            } else {
                output::print_error_text(&err)
            };
            exit_code
        }
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
