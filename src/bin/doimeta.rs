//! CLI binary for DOI metadata resolution.
//!
//! Usage: doimeta resolve 10.18637/jss.v048.i02 --output json

#[cfg(feature = "cli")]
mod cli {
    use clap::{Parser, Subcommand};
    use doi_metadata::{CitationStyle, DoiClient, MetadataRecord};
    use std::time::Duration;
    use tracing_subscriber::EnvFilter;

    #[derive(Parser)]
    #[command(name = "doimeta", about = "Resolve DOIs into bibliographic metadata", version)]
    struct Cli {
        /// Resolver base URL (overrides DOI_RESOLVER_URL)
        #[arg(long, global = true)]
        resolver: Option<String>,

        /// Request timeout in seconds (overrides DOI_TIMEOUT_SECS)
        #[arg(long, global = true)]
        timeout: Option<u64>,

        /// Log requests to stderr
        #[arg(short, long, global = true)]
        verbose: bool,

        /// Output format
        #[arg(long, global = true, default_value = "table")]
        output: OutputFormat,

        #[command(subcommand)]
        command: Commands,
    }

    #[derive(Clone, Copy, clap::ValueEnum)]
    enum OutputFormat {
        Table,
        Json,
    }

    #[derive(Subcommand)]
    enum Commands {
        /// Resolve a DOI into a classified metadata record
        Resolve {
            /// DOI (bare, doi:-prefixed, or resolver URL)
            doi: String,
        },
        /// Print a formatted citation
        Cite {
            /// DOI
            doi: String,
            /// CSL style name
            #[arg(short, long, default_value = CitationStyle::APA)]
            style: String,
        },
        /// Print a BibTeX entry
        Bibtex {
            /// DOI
            doi: String,
        },
    }

    fn init_logging(verbose: bool) {
        let default = if verbose { "doi_metadata=debug" } else { "warn" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    fn make_client(
        resolver: Option<String>,
        timeout: Option<u64>,
    ) -> doi_metadata::error::Result<DoiClient> {
        let mut client = DoiClient::from_env()?;
        if let Some(r) = resolver {
            client = client.with_resolver(r);
        }
        if let Some(t) = timeout {
            client = client.with_timeout(Duration::from_secs(t))?;
        }
        Ok(client)
    }

    fn print_record_table(record: &MetadataRecord) {
        use comfy_table::{ContentArrangement, Table};

        let year = record.year().map(|y| y.to_string());

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Field", "Value"]);
        table.add_row(vec!["Variant", record.variant_name()]);
        table.add_row(vec!["Completeness", record.completeness_name()]);
        table.add_row(vec!["Author", record.author().unwrap_or("-")]);
        table.add_row(vec!["Year", year.as_deref().unwrap_or("-")]);
        table.add_row(vec!["Journal", record.journal().unwrap_or("-")]);
        table.add_row(vec!["Citation", record.citation().unwrap_or("-")]);

        println!("{table}");
    }

    pub async fn run() -> doi_metadata::error::Result<()> {
        let cli = Cli::parse();
        init_logging(cli.verbose);
        let client = make_client(cli.resolver, cli.timeout)?;

        match cli.command {
            Commands::Resolve { doi } => {
                let doi = client.locate(&doi)?;
                let record = client.resolve(&doi).await?;
                match cli.output {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&record)?);
                    }
                    OutputFormat::Table => {
                        println!("Metadata for {}:", doi);
                        print_record_table(&record);
                    }
                }
            }

            Commands::Cite { doi, style } => {
                let doi = client.locate(&doi)?;
                let text = client.fetch_citation(&doi, &style).await?;
                println!("{}", text.trim_end());
            }

            Commands::Bibtex { doi } => {
                let doi = client.locate(&doi)?;
                let text = client.fetch_bibtex(&doi).await?;
                println!("{}", text.trim_end());
            }
        }

        Ok(())
    }
}

#[cfg(feature = "cli")]
#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error ({}): {}", e.kind_name(), e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This binary requires the 'cli' feature. Build with: cargo build --features cli");
    std::process::exit(1);
}
