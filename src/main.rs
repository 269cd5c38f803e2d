use std::{path::Path, process, sync::Arc};

use folio::{
    application::{
        blog::BlogService,
        catalog::StaticCatalog,
        enhance::{Enhancer, LinkRewrite},
        error::AppError,
        repos::{PostsRepo, TranslationsRepo},
        source::SourceReader,
    },
    config::{self, Command, ContentSettings, Settings},
    domain::{error::DomainError, locale::normalize_locale},
    infra::{
        db::{DetachedStore, PostgresRepositories},
        error::InfraError,
        telemetry,
    },
};
use serde::Serialize;
use tracing::{Dispatch, Level, debug, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(error.exit_code());
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_max_level(Level::ERROR)
        .with_writer(std::io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;
    telemetry::init(&settings.logging)?;

    let enhancer = Arc::new(build_enhancer(&settings.content)?);
    let blog = build_blog_service(&settings, Arc::clone(&enhancer))?;
    let content = &settings.content;

    match cli_args.command {
        Command::Posts(args) => {
            let locale = resolve_locale(content, args.locale.locale)?;
            let posts = match args.limit {
                Some(limit) => blog.get_recent_posts(limit, &locale).await,
                None => blog.get_all_posts(&locale).await,
            };
            print_json(&posts)
        }
        Command::Post(args) => {
            let locale = resolve_locale(content, args.locale.locale)?;
            let post = blog
                .get_post_by_slug(&args.slug, &locale)
                .await
                .ok_or_else(|| DomainError::not_found("post"))?;
            print_json(&post)
        }
        Command::Categories(args) => {
            let locale = resolve_locale(content, args.locale)?;
            print_json(&blog.get_categories(&locale).await)
        }
        Command::Related(args) => {
            let locale = resolve_locale(content, args.locale.locale)?;
            print_json(
                &blog
                    .get_related_posts(&args.slug, args.limit, &locale)
                    .await,
            )
        }
        Command::Slugs => print_json(&blog.get_all_slugs().await),
        Command::Locales(args) => print_json(&blog.get_translated_locales(&args.slug).await),
        Command::Enhance(args) => run_enhance(&enhancer, &args.file).await,
    }
}

fn build_enhancer(content: &ContentSettings) -> Result<Enhancer, AppError> {
    let links = LinkRewrite::new(
        &content.legacy_path_prefix,
        &content.current_path_prefix,
        &content.legacy_domain,
    )
    .map_err(|err| InfraError::configuration(format!("invalid link rewrite rule: {err}")))?;
    Ok(Enhancer::new(links, content.enhance_cache_capacity))
}

fn build_blog_service(
    settings: &Settings,
    enhancer: Arc<Enhancer>,
) -> Result<BlogService, AppError> {
    let (posts, translations) = init_repositories(settings)?;
    let catalog = Arc::new(StaticCatalog::builtin(&enhancer));

    info!(
        static_posts = catalog.len(),
        source_locale = %settings.content.source_locale,
        database = settings.database.url.is_some(),
        "Content sources ready"
    );

    let source = SourceReader::new(
        catalog,
        posts,
        translations,
        enhancer,
        settings.content.source_locale.clone(),
    );
    Ok(BlogService::new(Arc::new(source)))
}

fn init_repositories(
    settings: &Settings,
) -> Result<(Arc<dyn PostsRepo>, Arc<dyn TranslationsRepo>), AppError> {
    let Some(url) = settings.database.url.as_deref() else {
        debug!("No database configured; serving the static catalog only");
        let store = Arc::new(DetachedStore);
        let posts: Arc<dyn PostsRepo> = store.clone();
        let translations: Arc<dyn TranslationsRepo> = store;
        return Ok((posts, translations));
    };

    let pool = PostgresRepositories::connect_lazy(
        url,
        settings.database.max_connections.get(),
        settings.database.acquire_timeout,
    )
    .map_err(|err| InfraError::database(format!("invalid database url: {err}")))?;

    let repositories = Arc::new(PostgresRepositories::new(pool));
    let posts: Arc<dyn PostsRepo> = repositories.clone();
    let translations: Arc<dyn TranslationsRepo> = repositories;
    Ok((posts, translations))
}

fn resolve_locale(
    content: &ContentSettings,
    requested: Option<String>,
) -> Result<String, AppError> {
    let Some(requested) = requested else {
        return Ok(content.source_locale.clone());
    };
    let locale = normalize_locale(&requested)?;
    if !content.supports(&locale) {
        return Err(DomainError::validation(format!(
            "locale `{locale}` is not enabled; supported: {}",
            content.supported_locales.join(", ")
        ))
        .into());
    }
    Ok(locale)
}

async fn run_enhance(enhancer: &Enhancer, file: &Path) -> Result<(), AppError> {
    let raw = tokio::fs::read_to_string(file)
        .await
        .map_err(InfraError::from)?;
    println!("{}", enhancer.enhance(&raw));
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|err| AppError::unexpected(format!("failed to encode output: {err}")))?;
    println!("{rendered}");
    Ok(())
}
