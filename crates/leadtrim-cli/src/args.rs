use std::path::PathBuf;

use clap::Parser;
use leadtrim_engine::Config;

/// Print the leading-trim stylesheet fragment for font import URLs,
/// e.g. `leadtrim 'fonts/Inter.ttf?name=Inter&700'`
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Font import URLs (`path/or/url.ttf?name=Family&700&italic`)
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Mixin name prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Cache directory [default: .cache]
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Root for local font paths [default: .]
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Do not read or write the cache directory
    #[arg(long)]
    pub no_cache: bool,
}

impl Args {
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        if let Some(dir) = &self.cache_dir {
            config.cache_dir = dir.clone();
        }
        if let Some(dir) = &self.base_dir {
            config.base_dir = dir.clone();
        }
        config.caching = !self.no_cache;
        config
    }
}
