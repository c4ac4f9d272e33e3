use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use citypages_api::app::{build_app, build_services, open_store};
use citypages_infra::{
    Config, PostgresReferenceStore, generate_static_sitemaps, seed_locations, seed_products,
};
use citypages_sitemap::SiteUrls;

#[derive(Parser)]
#[command(name = "citypages")]
#[command(about = "Product/location landing pages and their sitemaps.")]
struct CommandLine {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Run the HTTP server (default)
    Serve,
    /// Write public/sitemap.xml and public/sitemaps/{product}.xml
    GenerateSitemaps,
    /// Replace all products with the built-in catalogue
    SeedProducts,
    /// Add the built-in world city list, skipping existing slugs
    SeedLocations,
    /// Create the reference tables if they do not exist
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLine::parse();
    let config = Config::from_env().context("invalid configuration")?;
    citypages_observability::init(config.log_format);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(&config).await,
        Commands::GenerateSitemaps => generate_sitemaps(&config).await,
        Commands::SeedProducts => {
            let store = connect(&config).await?;
            let result = seed_products(&store).await;
            store.close().await;
            let inserted = result?;
            println!("Successfully added {inserted} products.");
            Ok(())
        }
        Commands::SeedLocations => {
            let store = connect(&config).await?;
            let result = seed_locations(&store).await;
            store.close().await;
            let report = result?;
            println!(
                "Added {} locations ({} duplicates skipped).",
                report.inserted, report.skipped
            );
            Ok(())
        }
        Commands::Migrate => {
            let store = connect(&config).await?;
            let result = store.migrate().await;
            store.close().await;
            result?;
            println!("Reference tables ready.");
            Ok(())
        }
    }
}

async fn serve(config: &Config) -> anyhow::Result<()> {
    let services = build_services(config).await?;
    let app = build_app(services);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn generate_sitemaps(config: &Config) -> anyhow::Result<()> {
    let urls = SiteUrls::new(&config.site_base_url).context("invalid SITE_BASE_URL")?;

    // Scoped connection: a dedicated pool that is closed once the run ends.
    let result = match &config.database_url {
        Some(_) => {
            let store = connect(config).await?;
            let result = generate_static_sitemaps(&store, &urls, &config.public_dir).await;
            store.close().await;
            result
        }
        None => {
            let store = open_store(config).await?;
            generate_static_sitemaps(store.as_ref(), &urls, &config.public_dir).await
        }
    };

    let report = result.context("sitemap generation failed")?;
    println!(
        "Generated {} product sitemaps and {}",
        report.product_sitemaps.len(),
        report.index.display()
    );
    Ok(())
}

async fn connect(config: &Config) -> anyhow::Result<PostgresReferenceStore> {
    let Some(url) = &config.database_url else {
        bail!("DATABASE_URL must be set for this command");
    };
    PostgresReferenceStore::connect(url, 1)
        .await
        .context("failed to connect to the reference database")
}
