use std::{io, sync::Once};

use metrics::{Unit, describe_counter};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::application::{
    enhance::{METRIC_ENHANCE_CACHE_HIT, METRIC_ENHANCE_CACHE_MISS},
    source::METRIC_SOURCE_FALLBACK,
};
use crate::config::{LogFormat, LoggingSettings};

use super::error::InfraError;

static METRIC_DESCRIPTIONS: Once = Once::new();

/// Install a global tracing subscriber using the provided logging settings.
///
/// Events go to stderr; stdout carries command output.
pub fn init(logging: &LoggingSettings) -> Result<(), InfraError> {
    describe_metrics();

    let env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt_layer)
        .try_init()
        .map_err(|err| {
            InfraError::telemetry(format!("failed to install tracing subscriber: {err}"))
        })
}

fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            METRIC_ENHANCE_CACHE_HIT,
            Unit::Count,
            "Enhanced content served from the memo."
        );
        describe_counter!(
            METRIC_ENHANCE_CACHE_MISS,
            Unit::Count,
            "Content run through the enhancement pipeline."
        );
        describe_counter!(
            METRIC_SOURCE_FALLBACK,
            Unit::Count,
            "Remote reads that degraded to no data, by relation and reason."
        );
    });
}
