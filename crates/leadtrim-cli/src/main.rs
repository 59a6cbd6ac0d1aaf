//! leadtrim - Main Entry Point

mod args;

use anyhow::Result;
use clap::Parser;
use leadtrim_engine::Importer;
use tracing_subscriber::EnvFilter;

use crate::args::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = args.config();
    let prefix = config.prefix.clone();
    let importer = Importer::new(config)?;

    tracing::debug!("leadtrim v{}", leadtrim_engine::VERSION);

    let mut failed = 0;
    smol::block_on(async {
        for url in &args.urls {
            match importer.import(url, &prefix).await {
                Some(fragment) => println!("{}", fragment.contents),
                None => {
                    tracing::error!("No fragment generated for {}", url);
                    failed += 1;
                }
            }
        }
    });

    if failed > 0 {
        anyhow::bail!("{} of {} imports produced no fragment", failed, args.urls.len());
    }

    Ok(())
}
