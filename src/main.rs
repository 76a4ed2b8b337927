use clap::{Parser, Subcommand};
use drink_import::fetchers::is_recipe_page;
use drink_import::{
    HttpImageFetcher, ImportError, PageFetcher, RecipeBook, RecipeInput, ScraperConfig,
};
use log::{error, info, warn};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "drink-import", about = "Import drink recipes into a JSON file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Skip image downloads
    #[arg(long, global = true)]
    no_images: bool,

    /// Output file name inside the data directory (default: timestamped)
    #[arg(short, long, global = true)]
    output: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract recipes from local documents
    File {
        /// HTML files, or plain-text files ending in .txt
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Treat every file as plain text
        #[arg(long)]
        plain: bool,
    },
    /// Extract recipes from URLs or numeric post ids
    Url {
        #[arg(required = true)]
        targets: Vec<String>,
    },
    /// Visit a range of post ids
    Range {
        /// First post id (default: from config)
        #[arg(long)]
        start: Option<u32>,
        /// Last post id, inclusive (default: from config)
        #[arg(long)]
        end: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ScraperConfig::load()?;

    let mut book = RecipeBook::new(config.base_url.clone());
    if !cli.no_images {
        book = book.with_image_fetcher(HttpImageFetcher::new(
            &config.image_dir,
            &config.user_agent,
            Some(config.timeout()),
        )?);
    }

    match cli.command {
        Commands::File { paths, plain } => {
            for path in paths {
                let content = match tokio::fs::read_to_string(&path).await {
                    Ok(content) => content,
                    Err(e) => {
                        warn!("{}: {}", path.display(), e);
                        continue;
                    }
                };
                let input = if plain || is_plain_text_file(&path) {
                    RecipeInput::plain_text(content)
                } else {
                    RecipeInput::markup(content)
                };
                if let Err(e) = book.add_recipe(input).await {
                    warn!("{}: {}", path.display(), e);
                }
            }
        }
        Commands::Url { targets } => {
            let fetcher = PageFetcher::new(&config.user_agent, Some(config.timeout()))?;
            for target in targets {
                let url = match target.parse::<u32>() {
                    Ok(id) => config.post_url(id),
                    Err(_) => target,
                };
                if let Err(e) = import_page(&mut book, &fetcher, &url, false).await {
                    warn!("{}: {}", url, e);
                }
            }
        }
        Commands::Range { start, end } => {
            let fetcher = PageFetcher::new(&config.user_agent, Some(config.timeout()))?;
            let start = start.unwrap_or(config.range_start);
            let end = end.unwrap_or(config.range_end);
            info!("Processing post ids {} to {}", start, end);

            for id in start..=end {
                let url = config.post_url(id);
                if let Err(e) = import_page(&mut book, &fetcher, &url, true).await {
                    warn!("[{}/{}] {}: {}", id, end, url, e);
                }
                tokio::time::sleep(config.request_delay()).await;
            }
        }
    }

    if book.is_empty() {
        error!("No recipes found");
        return Ok(());
    }

    let path = match cli.output {
        Some(name) => {
            let path = config.data_dir.join(name);
            book.save(&path).await?;
            path
        }
        None => book.save_consolidated(&config.data_dir).await?,
    };
    info!("{} recipes written to {}", book.len(), path.display());

    Ok(())
}

async fn import_page(
    book: &mut RecipeBook,
    fetcher: &PageFetcher,
    url: &str,
    require_recipe_markers: bool,
) -> Result<(), ImportError> {
    let body = fetcher.fetch(url).await?;
    if require_recipe_markers && !is_recipe_page(&body) {
        info!("Not a recipe: {}", url);
        return Ok(());
    }

    let record = book
        .add_recipe(RecipeInput::markup(body).source_url(url))
        .await?;
    info!("Imported {} from {}", record.title, url);
    Ok(())
}

fn is_plain_text_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}
