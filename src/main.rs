//! CLI entry point for jammlog

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jammlog")]
#[command(version)]
#[command(about = "A minimal blog: a post list and post detail pages", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Post content
        #[arg(short = 'm', long, conflicts_with = "file")]
        content: Option<String>,

        /// Read the post content from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Delete a post
    Delete {
        /// Id of the post to delete
        id: u64,
    },

    /// List stored posts
    List,

    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// Start the blog server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to the configured address)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "jammlog=debug,info"
    } else {
        "jammlog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            jammlog::commands::init::init_site(&target_dir)?;
            println!("Initialized empty blog in {:?}", target_dir);
        }

        Commands::New {
            title,
            content,
            file,
        } => {
            let app = jammlog::Jammlog::new(&base_dir)?;
            let content = match (content, file) {
                (Some(content), _) => content,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {:?}", path))?,
                (None, None) => String::new(),
            };
            let post = jammlog::commands::new::create_post(&app, &title, &content)?;
            println!("Created post {}: {}", post.id, post.url());
        }

        Commands::Delete { id } => {
            let app = jammlog::Jammlog::new(&base_dir)?;
            let post = jammlog::commands::delete::delete_post(&app, id)?;
            println!("Deleted post {}: {}", post.id, post.title);
        }

        Commands::List => {
            let app = jammlog::Jammlog::new(&base_dir)?;
            jammlog::commands::list::run(&app)?;
        }

        Commands::Generate => {
            let app = jammlog::Jammlog::new(&base_dir)?;
            tracing::info!("Generating static files...");
            app.generate()?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip } => {
            let app = jammlog::Jammlog::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| app.config.server.ip.clone());
            let port = port.unwrap_or(app.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            jammlog::server::start(&app, &ip, port).await?;
        }

        Commands::Clean => {
            let app = jammlog::Jammlog::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            app.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("jammlog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
