//! Remote fetcher entry point.
//!
//! One outbound GET to the GitHub users API, then either the pretty-printed
//! record on stdout or a logged error and a failing exit status.

use clap::Parser;
use saba::UserClient;
use tracing::error;

#[derive(Parser)]
#[command(name = "gh-user")]
#[command(about = "Look up a GitHub user and print the raw record", long_about = None)]
struct Cli {
    /// GitHub login to look up.
    #[arg(default_value = "milliorn")]
    login: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match UserClient::new().fetch_user(&cli.login).await {
        Ok(user) => {
            println!("{}", serde_json::to_string_pretty(&user)?);
            Ok(())
        }
        Err(e) => {
            error!(login = %cli.login, "error fetching user: {e}");
            Err(e.into())
        }
    }
}
