use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod aggregate;
mod dataset;
mod enrich;
mod graphql;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "problem-topics")]
#[command(about = "Annotate coding problems with topic tags and list the topics in use", long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch topic tags for every problem and write an annotated copy.
    Enrich {
        #[arg(long, default_value = "data.json")]
        input: PathBuf,

        #[arg(short = 'o', long, default_value = "problems_with_topics.json")]
        out: PathBuf,

        #[arg(long, default_value = graphql::DEFAULT_ENDPOINT)]
        endpoint: String,
    },

    /// Print the sorted set of topics already present in a dataset.
    Topics {
        #[arg(long, default_value = "data1.json")]
        input: PathBuf,
    },
}

/// Logs go to stderr so the topic report on stdout stays clean.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match verbose {
        0 => "problem_topics=info",
        1 => "problem_topics=debug",
        _ => "problem_topics=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Enrich {
            input,
            out,
            endpoint,
        } => {
            let client = graphql::GraphQlClient::new(endpoint)?;
            tracing::debug!(endpoint = client.endpoint(), "using topic endpoint");
            enrich::run_enrich(&input, &out, &client)?;
        }
        Commands::Topics { input } => {
            let stdout = std::io::stdout();
            aggregate::print_all_unique_topics(&input, &mut stdout.lock())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_file_names() {
        let cli = Cli::try_parse_from(["problem-topics", "enrich"]).unwrap();
        match cli.cmd {
            Commands::Enrich {
                input,
                out,
                endpoint,
            } => {
                assert_eq!(input, PathBuf::from("data.json"));
                assert_eq!(out, PathBuf::from("problems_with_topics.json"));
                assert_eq!(endpoint, "https://leetcode.com/graphql");
            }
            Commands::Topics { .. } => panic!("expected enrich"),
        }

        let cli = Cli::try_parse_from(["problem-topics", "topics"]).unwrap();
        match cli.cmd {
            Commands::Topics { input } => assert_eq!(input, PathBuf::from("data1.json")),
            Commands::Enrich { .. } => panic!("expected topics"),
        }
    }

    #[test]
    fn verbosity_is_global() {
        let cli = Cli::try_parse_from(["problem-topics", "topics", "-vv", "--input", "x.json"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
