use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tailor_declarations::OwnedPathSet;
use tailor_resolver::{FsPathResolver, SearchScope};
use tailor_scanner::BackendRegistry;

mod config;
mod report;

use config::TailorConfig;

#[derive(Parser)]
#[command(name = "tailor")]
#[command(about = "Propose build-unit declarations for unowned source files", long_about = None)]
#[command(version)]
struct Cli {
    /// Workspace root to scan
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Restrict the scan to these workspace-relative directories
    /// (overrides `search_paths` from the config)
    #[arg(long = "search-path")]
    search_paths: Vec<String>,

    /// Config file (default: <root>/tailor.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Newline-delimited file of already-owned relative paths,
    /// merged with `owned` from the config
    #[arg(long)]
    owned_list: Option<PathBuf>,

    /// Emit proposals as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

fn load_owned(config: &TailorConfig, owned_list: Option<&PathBuf>) -> Result<OwnedPathSet> {
    let mut owned: OwnedPathSet = config.owned.iter().cloned().collect();
    if let Some(path) = owned_list {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read owned list {}", path.display()))?;
        owned.extend(
            raw.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }
    Ok(owned)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = TailorConfig::load(cli.config.as_deref(), &cli.root)?;
    let search_paths = if cli.search_paths.is_empty() {
        config.search_paths.clone()
    } else {
        cli.search_paths.clone()
    };
    let scope = SearchScope::new(search_paths);
    let owned = load_owned(&config, cli.owned_list.as_ref())?;

    log::info!(
        "Scanning {} ({} owned path(s) declared)",
        cli.root.display(),
        owned.len()
    );

    let resolver = FsPathResolver::new(&cli.root);
    let registry = BackendRegistry::builtin();
    let proposals = registry.scan_all(&resolver, &scope, &owned).await?;

    let output = if cli.json {
        report::json(&proposals)?
    } else {
        report::text(&proposals)
    };
    print_stdout(&output)?;

    Ok(())
}
