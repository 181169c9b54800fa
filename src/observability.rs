use std::net::SocketAddr;

/// Counter: bookings committed.
pub const BOOKINGS_TOTAL: &str = "innkeep_bookings_total";

/// Counter: booking attempts refused (conflict, unknown room, live duplicate
/// reference) and updates rolled back on conflict.
pub const BOOKING_CONFLICTS_TOTAL: &str = "innkeep_booking_conflicts_total";

/// Counter: bookings replaced by a successful update.
pub const UPDATES_TOTAL: &str = "innkeep_updates_total";

/// Counter: bookings cancelled.
pub const CANCELLATIONS_TOTAL: &str = "innkeep_cancellations_total";

/// Counter: availability queries served.
pub const AVAILABILITY_QUERIES_TOTAL: &str = "innkeep_availability_queries_total";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}
