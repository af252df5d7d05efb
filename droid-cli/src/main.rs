use clap::Parser;

mod commands;
mod error;

pub use error::AppError;

#[derive(Parser, Debug)]
#[clap(name = "droid-cli")]
#[clap(
    about = "Copy, read and inspect files through bounded buffers",
    long_about = None
)]
struct Cli {
    #[clap(subcommand)]
    command: commands::Commands,
}

fn main() {
    env_logger::init();

    let args = Cli::parse();
    if let Err(err) = args.command.run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_copy_with_defaults() {
        let cli = Cli::try_parse_from(["droid-cli", "copy", "a", "b"]).unwrap();
        assert!(matches!(cli.command, commands::Commands::Copy(_)));
    }

    #[test]
    fn parses_nested_ip_command() {
        let cli =
            Cli::try_parse_from(["droid-cli", "ip", "from-int", "16885952"])
                .unwrap();
        assert!(matches!(
            cli.command,
            commands::Commands::Ip {
                subcommand: commands::ip::Ip::FromInt { value: 16885952 }
            }
        ));
    }

    #[test]
    fn parses_negative_skip_for_validation_downstream() {
        let cli = Cli::try_parse_from([
            "droid-cli", "read", "file", "--skip", "-3",
        ])
        .unwrap();
        assert!(matches!(cli.command, commands::Commands::Read(_)));
    }
}
