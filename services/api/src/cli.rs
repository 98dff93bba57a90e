use crate::demo::{run_catalog_show, run_demo, CatalogShowArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use tasador::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Property Parameter Catalog",
    about = "Serve the parameter catalog and drive property valuation submissions from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the catalog HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the reference data the service publishes
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Run an end-to-end demo: serve the catalog, bootstrap a session, submit a property
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Print categories with their published values
    Show(CatalogShowArgs),
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

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog {
            command: CatalogCommand::Show(args),
        } => run_catalog_show(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
