use clap::Parser;
use log::{error, info};
use oobrcon::{client::Client, config::Timeouts};
use std::{process::ExitCode, time::Duration};

/// Send a rcon command to a game server and print its reply.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Server address, as A.B.C.D:PORT
    address: String,
    /// Command to run; several words are joined with spaces
    #[clap(required = true)]
    command: Vec<String>,
    /// Rcon password
    #[clap(short, long, env = "RCON_PASSWORD", hide_env_values = true)]
    password: String,
    /// How long to wait for the first reply packet
    #[clap(long, default_value = "5000")]
    primary_timeout_ms: u64,
    /// How long to wait for each follow-up packet
    #[clap(long, default_value = "1000")]
    secondary_timeout_ms: u64,
    /// Maximum number of follow-up packets to wait for
    #[clap(long, default_value = "2")]
    max_secondary_attempts: u32,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let command = args.command.join(" ");
    let timeouts = Timeouts::default()
        .with_primary(Duration::from_millis(args.primary_timeout_ms))
        .with_secondary(Duration::from_millis(args.secondary_timeout_ms))
        .with_max_secondary_attempts(args.max_secondary_attempts);

    info!("sending {:?} to {}", command, args.address);

    let client = Client::new().timeouts(timeouts);
    match client.command(&args.address, &args.password, &command).await {
        Ok(response) => {
            print!("{}", response);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{:?}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
