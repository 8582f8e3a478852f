//! Prometheus middleware, exposed at /metrics.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use once_cell::sync::Lazy;
use prometheus::{opts, IntGauge};

/// Global Prometheus handle, shared between the server and tests.
pub static METRICS: Lazy<PrometheusMetrics> = Lazy::new(|| {
    PrometheusMetricsBuilder::new("rankings_api")
        .endpoint("/metrics")
        .build()
        .expect("metrics builder")
});

/// Ranking snapshots held in the database, set once seeding has finished.
pub static RANKING_ROWS: Lazy<IntGauge> = Lazy::new(|| {
    let gauge = IntGauge::with_opts(
        opts!("ranking_rows", "Ranking snapshots held in the database")
            .namespace("rankings_api"),
    )
    .expect("ranking rows gauge");
    METRICS
        .registry
        .register(Box::new(gauge.clone()))
        .expect("register ranking rows gauge");
    gauge
});
