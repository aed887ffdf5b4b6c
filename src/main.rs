// Mattermost Notifier - command line entry point

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info, Level};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use mattermost_notifier::services::notification::HttpMattermostApi;
use mattermost_notifier::{
    AppError, ConfigService, MattermostNotification, Notification, NotificationError,
    NotificationModel, NotificationType, NotifyOutcome,
};

#[derive(Parser, Debug)]
#[command(
    name = "mattermost-notifier",
    about = "Send notifications to a Mattermost incoming webhook",
    version
)]
struct Cli {
    /// Config file (default: ~/.mattermost-notifier/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default config file if none exists and print its path
    Init,
    /// Send the test message using the configured settings
    Test,
    /// Send a notification for an event
    Send {
        /// Event kind, e.g. NewRequest, Issue, FaultQueueAdd
        #[arg(short, long)]
        kind: String,
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        user: String,
        /// Issue description
        #[arg(short, long)]
        body: Option<String>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Notification(#[from] NotificationError),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = match cli.config {
        Some(path) => ConfigService::open(path)?,
        None => ConfigService::open_default()?,
    };

    let model = match cli.command {
        Commands::Init => {
            println!("{}", config.path().display());
            return Ok(());
        }
        Commands::Test => NotificationModel::test(),
        Commands::Send {
            kind,
            title,
            user,
            body,
        } => {
            let mut model =
                NotificationModel::new(NotificationType::from_str_value(&kind), title, user);
            model.body = body;
            model
        }
    };

    let api = HttpMattermostApi::new(&config.get_config().http)?;
    let config = Arc::new(config);
    let notifier = MattermostNotification::new(Arc::new(api), config);

    match notifier.notify(&model).await? {
        NotifyOutcome::Pushed(outcome) if outcome.is_delivered() => {
            info!("{} notification delivered", model.notification_type);
        }
        outcome => {
            info!("{} notification not delivered: {:?}", model.notification_type, outcome);
        }
    }
    Ok(())
}
