use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

mod parsers;
mod plan;
mod render;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the merged itinerary for a customization file
    #[command(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        args: plan::PlanArgs,
    },
    /// Print the JSON schema of the customization input
    Schema,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Plan { args } => plan::run(args)?,
        Commands::Schema => {
            println!("{}", voyager_itinerary::json::schema::generate_json_schema()?);
        }
    }

    Ok(())
}
