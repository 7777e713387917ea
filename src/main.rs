use std::{fs::File, path::PathBuf};

use clap::{Parser, Subcommand};
use tokio::time::Instant;
use tracing::{debug, info, Level};

mod demos;

use demos::*;

/// Runs the language tour walkthroughs and prints what they produce.
#[derive(Parser, Debug)]
#[command(version, about = "Small walkthroughs of everyday language features.")]
struct Cli {
    /// Where log output is written.
    #[arg(long, default_value = "log.txt")]
    log_file: PathBuf,
    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Push items onto a stack, then pop them all.
    Stack(StackArgs),
    /// Count down to zero.
    Countdown(CountdownArgs),
    /// List every direction.
    Directions,
    /// Describe a network response.
    Response(ResponseArgs),
    /// Add, negate and compare two vectors.
    Vector(VectorArgs),
    /// Apply the bitwise operators to two bytes.
    Bits(BitsArgs),
    /// Show a string's encodings.
    Strings(StringsArgs),
    /// Run closures that capture, escape and evaluate lazily.
    Closures,
    /// Traits, default methods and matching on media items.
    Protocols,
    /// Download a gallery's photos concurrently.
    Photos(PhotosArgs),
    /// Record temperature readings from concurrent tasks.
    Temps(TempsArgs),
    /// Load users from a canned response.
    Users(UsersArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file = File::create(&cli.log_file)?;
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(file)
        .init();

    debug!("Parsed arguments: {:?}", cli);

    let start = Instant::now();
    match cli.command {
        Command::Stack(args) => execute_stack(args),
        Command::Countdown(args) => execute_countdown(args),
        Command::Directions => execute_directions(),
        Command::Response(args) => execute_response(args)?,
        Command::Vector(args) => execute_vector(args),
        Command::Bits(args) => execute_bits(args),
        Command::Strings(args) => execute_strings(args),
        Command::Closures => execute_closures(),
        Command::Protocols => execute_protocols(),
        Command::Photos(args) => execute_photos(args).await?,
        Command::Temps(args) => execute_temps(args).await?,
        Command::Users(args) => execute_users(args).await,
    }
    info!("Walkthrough took {} ms", start.elapsed().as_millis());

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_vector_accepts_negative_numbers() {
        let cli = Cli::try_parse_from(["tour", "vector", "-1", "2", "3", "-4"]).unwrap();
        match cli.command {
            Command::Vector(args) => {
                assert_eq!(
                    (args.x1, args.y1, args.x2, args.y2),
                    (-1.0, 2.0, 3.0, -4.0)
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_temps_accepts_negative_readings() {
        let cli = Cli::try_parse_from(["tour", "temps", "Out", "-3", "5"]).unwrap();
        match cli.command {
            Command::Temps(args) => {
                assert_eq!(args.label, "Out");
                assert_eq!(args.readings, vec![-3, 5]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_options_and_defaults() {
        let cli = Cli::try_parse_from(["tour", "--verbose", "directions"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_file, PathBuf::from("log.txt"));
        assert!(matches!(cli.command, Command::Directions));

        assert!(Cli::try_parse_from(["tour", "stack"]).is_err());
        assert!(Cli::try_parse_from(["tour", "bits", "256", "1"]).is_err());
    }

    #[test]
    fn test_response_rejects_bad_status() {
        let cli =
            Cli::try_parse_from(["tour", "response", "failure", "--status", "42"]).unwrap();
        match cli.command {
            Command::Response(args) => assert!(execute_response(args).is_err()),
            other => panic!("unexpected command: {:?}", other),
        }

        let cli =
            Cli::try_parse_from(["tour", "response", "failure", "--status", "503"]).unwrap();
        match cli.command {
            Command::Response(args) => assert!(execute_response(args).is_ok()),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
