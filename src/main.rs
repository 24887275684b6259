use anyhow::Context;
use browser::pages::showcase_page;
use browser::{PageAction, Tab};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;

use config::AppConfig;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Replay link clicks on the showcase page and report where each one lands.
#[derive(Debug, Parser)]
#[command(name = "glidepath", version)]
struct Cli {
    /// TOML file with [viewport] and [smooth_scroll] tables.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override smooth_scroll.offset.
    #[arg(long, allow_negative_numbers = true)]
    offset: Option<f64>,

    #[arg(long, default_value = "https://example.com/")]
    url: String,

    /// Raw href of a link to click; repeatable. Defaults to every link.
    #[arg(long = "click")]
    clicks: Vec<String>,

    /// Leave the interceptor unmounted to compare with default behavior.
    #[arg(long)]
    no_smooth_scroll: bool,

    /// Animation step per frame, in ms.
    #[arg(long, default_value_t = 16.0)]
    frame_ms: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(offset) = cli.offset {
        config.smooth_scroll.offset = offset;
    }

    let mut tab = Tab::new(1, &cli.url, showcase_page(), config.viewport)
        .with_context(|| format!("opening {}", cli.url))?;
    if !cli.no_smooth_scroll {
        tab.mount_smooth_scroll(config.smooth_scroll);
    }

    let clicks: Vec<String> = if cli.clicks.is_empty() {
        tab.links().into_iter().map(|(_, href)| href).collect()
    } else {
        cli.clicks
    };

    for href in clicks {
        let Some(link) = tab.link_by_href(&href) else {
            println!("{href:<40} no such link");
            continue;
        };

        let label = tab.link_text(link).unwrap_or_default();
        log::info!("clicking {label:?} ({href})");

        let before = tab.scroll_y();
        let action = tab.click(link);
        let mut frames = 0u32;
        while tab.tick(cli.frame_ms) {
            frames += 1;
        }

        match action {
            Some(PageAction::Navigate(url)) => {
                println!("{href:<40} navigate -> {url}");
            }
            None => {
                println!(
                    "{href:<40} y {before:>7.1} -> {:>7.1} ({frames} frames)  {}",
                    tab.scroll_y(),
                    tab.url()
                );
            }
        }
    }

    log::debug!("history: {} entries", tab.history().len());
    Ok(())
}
