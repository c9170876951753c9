use crate::infra::open_directory;
use crate::server;
use clap::{Args, Parser, Subcommand};
use hireflow::commands::{AddCommandParser, CommandParser};
use hireflow::config::{AppConfig, StorageConfig};
use hireflow::error::AppError;
use hireflow::telemetry;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "HireFlow",
    about = "Track job applicants from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Add an applicant, e.g. `add n/John Doe p/98765432 e/johnd@example.com ...`
    Add(AddArgs),
    /// Print every tracked applicant
    List(DataFileArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug, Default)]
struct DataFileArgs {
    /// Override APP_DATA_FILE for this invocation
    #[arg(long)]
    data_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct AddArgs {
    #[command(flatten)]
    storage: DataFileArgs,
    /// Prefixed applicant fields
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "FIELDS"
    )]
    fields: Vec<String>,
}

impl DataFileArgs {
    fn resolve(self, storage: &StorageConfig) -> PathBuf {
        self.data_file.unwrap_or_else(|| storage.data_file.clone())
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));
    let config = setup()?;

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Add(args) => run_add(args, &config.storage),
        Command::List(args) => run_list(args, &config.storage),
    }
}

/// Load configuration and install the tracing subscriber shared by every command.
fn setup() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

fn run_add(args: AddArgs, storage: &StorageConfig) -> Result<(), AppError> {
    let directory = open_directory(args.storage.resolve(storage))?;
    let command = AddCommandParser.parse(&command_tail(&args.fields))?;
    let (result, _) = directory.add(&command)?;
    println!("{}", result.feedback());
    Ok(())
}

fn run_list(args: DataFileArgs, storage: &StorageConfig) -> Result<(), AppError> {
    let directory = open_directory(args.resolve(storage))?;
    let book = directory.snapshot();
    if book.is_empty() {
        println!("No applicants tracked yet");
        return Ok(());
    }

    println!("Listed {} applicant(s):", book.len());
    for (index, applicant) in book.iter().enumerate() {
        println!("{}. {}", index + 1, applicant);
    }
    Ok(())
}

/// Rebuild the text after the command word from shell-split arguments.
fn command_tail(fields: &[String]) -> String {
    format!(" {}", fields.join(" "))
}
