use clap::Parser;
use hl_core::{token, Article, BookmarkStore, Error, Result};
use hl_feed::client::{DEFAULT_COUNTRY, DEFAULT_PAGE_SIZE};
use hl_feed::{FeedConfig, HeadlinesQuery, NewsClient};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bookmark storage backend. Available backends: file (default), memory
    #[arg(long, default_value = "file")]
    storage: String,
    /// Path of the file-backed bookmark store
    #[arg(long)]
    storage_path: Option<PathBuf>,
    /// NewsAPI key; falls back to the NEWSAPI_KEY environment variable
    #[arg(long)]
    api_key: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Show the home feed: the breaking strip plus the headline list
    Headlines {
        #[arg(long, default_value = DEFAULT_COUNTRY)]
        country: String,
        /// Category filter (business, entertainment, general, health, science, sports, technology)
        #[arg(long)]
        category: Option<String>,
    },
    /// Search headlines by free text
    Search {
        query: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        country: Option<String>,
    },
    /// Show one article by its token
    Show { token: String },
    /// Manage saved articles
    Bookmark {
        #[command(subcommand)]
        command: BookmarkCommands,
    },
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
}

#[derive(clap::Subcommand, Debug)]
enum BookmarkCommands {
    /// List saved articles
    List,
    /// Save the article addressed by a token
    Add { token: String },
    /// Remove the article addressed by a token
    Remove { token: String },
}

fn resolve_api_key(flag: Option<String>) -> Result<String> {
    if let Some(key) = flag {
        return Ok(key);
    }
    std::env::var("NEWSAPI_KEY")
        .map_err(|_| Error::Config("No API key: pass --api-key or set NEWSAPI_KEY".to_string()))
}

/// Decodes a route token, mapping a malformed one to `None` so callers can
/// show the not-found state instead of failing.
fn decode_token(raw: &str) -> Option<String> {
    match token::decode(raw) {
        Ok(id) => Some(id),
        Err(e) => {
            debug!("Failed to decode token {}: {}", raw, e);
            None
        }
    }
}

fn format_published(published_at: Option<&str>) -> String {
    published_at
        .and_then(|raw| chrono::DateTime::parse_from_rfc3339(raw).ok())
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn print_list(heading: &str, articles: &[Article]) {
    println!("{}", heading);
    for article in articles {
        println!(
            "  {}  {} ({})",
            token::encode(&article.id),
            article.title.as_deref().unwrap_or("(untitled)"),
            article.source_name
        );
    }
}

/// The detail view: re-fetch the feed, match the decoded identifier
/// against the regenerated set, print what the reader would see.
async fn show_article(
    client: &NewsClient,
    bookmarks: &Arc<dyn BookmarkStore>,
    raw_token: &str,
) -> Result<()> {
    let Some(id) = decode_token(raw_token) else {
        println!("Article not found.");
        return Ok(());
    };
    let query = HeadlinesQuery {
        country: Some(DEFAULT_COUNTRY.to_string()),
        ..Default::default()
    };
    let article = match client.article_by_id(&query, &id).await {
        Ok(article) => article,
        Err(Error::NotFound(_)) => {
            println!("Article not found.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    println!("{}", article.title.as_deref().unwrap_or("(untitled)"));
    println!(
        "{}  {}",
        format_published(article.published_at.as_deref()),
        article.source_name
    );
    if let Some(link) = &article.link {
        println!("{}", link);
    }
    println!();
    println!(
        "{}",
        article
            .content
            .as_deref()
            .or(article.description.as_deref())
            .unwrap_or("No content available.")
    );
    if bookmarks.contains(&article.id).await? {
        println!();
        println!("❤️ Bookmarked");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let api_key = resolve_api_key(cli.api_key)?;
    let client = NewsClient::new(FeedConfig::new(api_key));
    let bookmarks = hl_storage::create_store(&cli.storage, cli.storage_path.as_deref()).await?;
    info!("💾 Bookmark store initialized (using {})", cli.storage);

    match cli.command {
        Commands::Headlines { country, category } => {
            // The home feed fires both fetches at once, like the reading
            // surface it mirrors.
            let (breaking, headlines) = tokio::try_join!(
                client.breaking(&country, category.as_deref()),
                client.headlines(&country, category.as_deref()),
            )?;
            print_list("🔥 Breaking", &breaking);
            println!();
            print_list(
                &format!("📰 Headlines [{}]", category.as_deref().unwrap_or("general")),
                &headlines,
            );
        }
        Commands::Search {
            query,
            category,
            country,
        } => {
            let articles = client
                .top_headlines(&HeadlinesQuery {
                    country,
                    category,
                    query: Some(query),
                    page_size: Some(DEFAULT_PAGE_SIZE),
                })
                .await?;
            print_list("🔎 Results", &articles);
        }
        Commands::Show { token } => show_article(&client, &bookmarks, &token).await?,
        Commands::Bookmark { command } => match command {
            BookmarkCommands::List => {
                let entries = bookmarks.list().await?;
                if entries.is_empty() {
                    println!("No bookmarks saved.");
                } else {
                    print_list("🔖 Bookmarks", &entries);
                }
            }
            BookmarkCommands::Add { token: raw_token } => {
                let Some(id) = decode_token(&raw_token) else {
                    println!("Article not found.");
                    return Ok(());
                };
                let query = HeadlinesQuery {
                    country: Some(DEFAULT_COUNTRY.to_string()),
                    ..Default::default()
                };
                match client.article_by_id(&query, &id).await {
                    Ok(article) => {
                        bookmarks.add(&article).await?;
                        println!(
                            "🔖 Saved: {}",
                            article.title.as_deref().unwrap_or("(untitled)")
                        );
                    }
                    Err(Error::NotFound(_)) => println!("Article not found."),
                    Err(e) => return Err(e),
                }
            }
            BookmarkCommands::Remove { token: raw_token } => {
                let Some(id) = decode_token(&raw_token) else {
                    println!("Article not found.");
                    return Ok(());
                };
                bookmarks.remove(&id).await?;
                println!("Removed bookmark.");
            }
        },
        Commands::Serve { port } => {
            hl_web::serve(hl_web::AppState { client, bookmarks }, port).await?;
        }
    }

    Ok(())
}
