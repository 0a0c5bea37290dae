//! picker-client CLI entry point.

use clap::Parser;
use picker_client::cli::picks::PicksAction;
use picker_client::cli::results::ResultsAction;
use picker_client::cli::{into_outcomes, Cli, Commands, OutputFormat};
use picker_client::client::PickerClient;
use picker_client::output::{format_output, pretty};
use picker_core::contest::{rank_leaderboard, SavePicksRequest, SaveResultsRequest, Timestamp};

fn now_millis() -> Timestamp {
    Timestamp::Epoch(chrono::Utc::now().timestamp_millis())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = PickerClient::new(&cli.base_url);

    match cli.command {
        Commands::Picks(picks_cmd) => match picks_cmd.action {
            PicksAction::Save {
                week,
                member,
                picks,
            } => {
                let request = SavePicksRequest::new(week, member, into_outcomes(picks))
                    .with_timestamp(now_millis());
                let ack = client.save_picks(&request).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&ack, cli.format)),
                    OutputFormat::Pretty => {
                        if !cli.quiet {
                            println!("{}", ack.message)
                        }
                    }
                }
            }
            PicksAction::Get { week } => {
                let picks = client.get_picks(&week).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&picks, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_week_picks(&week, &picks)),
                }
            }
        },
        Commands::Results(results_cmd) => match results_cmd.action {
            ResultsAction::Save { week, results } => {
                let request = SaveResultsRequest::new(week, into_outcomes(results))
                    .with_timestamp(now_millis());
                let ack = client.save_results(&request).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&ack, cli.format)),
                    OutputFormat::Pretty => {
                        if !cli.quiet {
                            println!("{}", ack.message)
                        }
                    }
                }
            }
            ResultsAction::Get { week } => {
                let results = client.get_results(&week).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&results, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_results(&week, &results)),
                }
            }
        },
        Commands::Leaderboard => {
            let leaderboard = client.get_leaderboard().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&leaderboard, cli.format)),
                OutputFormat::Pretty => {
                    println!(
                        "{}",
                        pretty::format_leaderboard(&rank_leaderboard(&leaderboard))
                    )
                }
            }
        }
    }

    Ok(())
}
