use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};

pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Command-line arguments for the Folio binary.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Folio blog content reader")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "FOLIO_CONFIG_FILE",
        value_name = "PATH",
        global = true
    )]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: GlobalOverrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args, Default, Clone)]
pub struct GlobalOverrides {
    /// Override the database connection URL.
    #[arg(long = "database-url", value_name = "URL", global = true)]
    pub database_url: Option<String>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// List posts visible in a locale, newest first.
    Posts(ListArgs),
    /// Print a single post.
    Post(PostArgs),
    /// List distinct tags.
    Categories(LocaleArgs),
    /// List posts related to a slug by shared tags.
    Related(RelatedArgs),
    /// List every slug of the merged catalog.
    Slugs,
    /// List locales a post is available in.
    Locales(SlugArgs),
    /// Enhance a local content file and print the HTML.
    Enhance(EnhanceArgs),
}

#[derive(Debug, Args, Default, Clone)]
pub struct LocaleArgs {
    /// Locale to read; defaults to the source locale.
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct ListArgs {
    #[command(flatten)]
    pub locale: LocaleArgs,

    /// Only print the newest N posts.
    #[arg(long, value_name = "COUNT")]
    pub limit: Option<usize>,
}

#[derive(Debug, Args, Clone)]
pub struct PostArgs {
    #[arg(value_name = "SLUG")]
    pub slug: String,

    #[command(flatten)]
    pub locale: LocaleArgs,
}

#[derive(Debug, Args, Clone)]
pub struct RelatedArgs {
    #[arg(value_name = "SLUG")]
    pub slug: String,

    #[arg(long, default_value_t = DEFAULT_RELATED_LIMIT, value_name = "COUNT")]
    pub limit: usize,

    #[command(flatten)]
    pub locale: LocaleArgs,
}

#[derive(Debug, Args, Clone)]
pub struct SlugArgs {
    #[arg(value_name = "SLUG")]
    pub slug: String,
}

#[derive(Debug, Args, Clone)]
pub struct EnhanceArgs {
    /// Markdown or HTML file to enhance.
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,
}
