use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::db::create_pool;
use crate::store::postgres::PgStore;

mod import;
mod migrate;
mod seed;
mod serve;
mod token;

#[derive(Parser)]
#[command(about = "Careers page builder API and maintenance commands", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API
    Serve,
    /// Apply pending schema migrations
    Migrate {
        /// Undo the most recently applied migration instead
        #[arg(long)]
        revert: bool,
    },
    /// Import jobs from a spreadsheet into a company
    ImportJobs {
        company_slug: String,
        excel_file: PathBuf,
        /// Import at most N rows (0 imports everything)
        #[arg(long)]
        limit: Option<usize>,
        /// Print the spreadsheet structure and exit
        #[arg(long)]
        show_fields: bool,
    },
    /// Print a spreadsheet's headers and first rows
    ShowExcelFields { excel_file: PathBuf },
    /// Create the demo recruiter, company, sections and jobs
    Seed,
    /// Print a bearer token for a recruiter, creating it if needed
    IssueToken {
        username: String,
        #[arg(long)]
        email: Option<String>,
        /// Token lifetime in hours
        #[arg(long, default_value_t = 24)]
        ttl_hours: i64,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Serve => serve::run(Config::from_env()?).await,
        Command::Migrate { revert } => migrate::run(&Config::from_env()?, revert).await,
        Command::ImportJobs {
            company_slug,
            excel_file,
            limit,
            show_fields,
        } => {
            if show_fields {
                return import::show_structure(&excel_file, import::SampleRows::First);
            }
            let store = connect(&Config::from_env()?).await?;
            import::run(&store, &company_slug, &excel_file, limit).await
        }
        Command::ShowExcelFields { excel_file } => {
            import::show_structure(&excel_file, import::SampleRows::FirstThree)
        }
        Command::Seed => {
            let config = Config::from_env()?;
            let store = connect(&config).await?;
            seed::run(&store, &config).await
        }
        Command::IssueToken {
            username,
            email,
            ttl_hours,
        } => {
            let config = Config::from_env()?;
            let store = connect(&config).await?;
            token::run(&store, &config, &username, email.as_deref(), ttl_hours).await
        }
    }
}

async fn connect(config: &Config) -> Result<PgStore> {
    Ok(PgStore::new(create_pool(&config.database_url).await?))
}
