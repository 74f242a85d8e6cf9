//! Navwalker
//!
//! Renders a menu file to navigation markup on stdout.
//!
//! Usage:
//!   navwalker menu.json --current-url /shop/shoes

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use navwalker::loader::load_items;
use navwalker::menu::{mark_active_trail, render, render_fallback, render_menu};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Command-line arguments. Flags override the NAVWALKER_* environment.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Menu file (JSON or YAML). Without one, the fallback menu is rendered.
    menu: Option<PathBuf>,

    /// Deepest level rendered (0 = unlimited).
    #[arg(long)]
    max_depth: Option<usize>,

    /// URL of the page being viewed, used to mark the active trail.
    #[arg(long)]
    current_url: Option<String>,

    /// Emit items only, without the container and list wrapper.
    #[arg(long)]
    bare: bool,

    /// Disable tab indentation.
    #[arg(long)]
    no_indent: bool,

    /// Treat the viewer as a menu administrator.
    #[arg(long)]
    admin: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        if self.no_indent {
            config.indent = false;
        }
        if self.admin {
            config.admin = true;
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    let config = Config::from_env().context("failed to load configuration")?;

    println!("{}", run(&args, config)?);
    Ok(())
}

/// Load, mark and render the menu selected by `args`.
fn run(args: &Args, mut config: Config) -> Result<String> {
    args.apply(&mut config);

    let render_config = config.render_config();
    let shell = config.shell();

    let items = match &args.menu {
        Some(path) => load_items(path)
            .with_context(|| format!("failed to load menu from {}", path.display()))?,
        None => Vec::new(),
    };
    let items = match &args.current_url {
        Some(url) => mark_active_trail(&items, url),
        None => items,
    };

    let html = if items.is_empty() {
        info!("no menu items, rendering fallback");
        render_fallback(&shell, &render_config)
    } else if args.bare {
        render(&items, &render_config)
    } else {
        render_menu(&items, &render_config, &shell)
    };
    Ok(html)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
