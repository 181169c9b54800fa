use std::collections::HashSet;

use tracing::info;

use innkeep::model::Day;
use innkeep::Engine;

fn days(ds: &[Day]) -> HashSet<Day> {
    ds.iter().copied().collect()
}

/// Demonstration driver: walks the engine through a sample interaction and
/// logs every result. Not part of the engine contract.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let metrics_port: Option<u16> = std::env::var("INNKEEP_METRICS_PORT")
        .ok()
        .and_then(|s| s.parse().ok());
    innkeep::observability::init(metrics_port);

    let engine = Engine::new([101, 102, 103, 104, 105]);
    info!("hotel with rooms 101..=105, all unbooked");

    let booked = engine.book_rooms("BR1", &days(&[1, 2, 3]), &[101, 102]).await;
    info!("book BR1: rooms 101,102 on days 1,2,3 -> {booked}");

    let any = engine.are_any_rooms_booked(&days(&[2, 4]), &[101, 103]).await;
    info!("any of rooms 101,103 booked on days 2,4 -> {any}");

    match engine.update_booking("BR1", &days(&[4, 5, 6]), &[103, 104]).await {
        Ok(updated) => info!("update BR1 to rooms 103,104 on days 4,5,6 -> {updated}"),
        Err(e) => info!("update BR1 failed: {e}"),
    }

    let old = engine.are_any_rooms_booked(&days(&[1, 2, 3]), &[101, 102]).await;
    info!("old rooms 101,102 still booked on days 1,2,3 -> {old}");
    let new = engine.are_any_rooms_booked(&days(&[4, 5, 6]), &[103, 104]).await;
    info!("new rooms 103,104 booked on days 4,5,6 -> {new}");

    match engine.cancel_booking("BR1").await {
        Ok(()) => info!("cancel BR1: ok"),
        Err(e) => info!("cancel BR1 failed: {e}"),
    }
    let after = engine.are_any_rooms_booked(&days(&[4, 5, 6]), &[103, 104]).await;
    info!("rooms 103,104 booked on days 4,5,6 after cancel -> {after}");

    if let Err(e) = engine.cancel_booking("BR2").await {
        info!("cancel BR2 -> {e}");
    }

    let br3 = engine.book_rooms("BR3", &days(&[4, 5, 6]), &[101]).await;
    info!("book BR3: room 101 on days 4,5,6 -> {br3}");
    let br4 = engine.book_rooms("BR4", &days(&[4, 5, 6]), &[102]).await;
    info!("book BR4: room 102 on days 4,5,6 -> {br4}");
    let br5 = engine.book_rooms("BR5", &days(&[4, 5, 6]), &[101]).await;
    info!("book BR5: room 101 on days 4,5,6 (conflicts with BR3) -> {br5}");
}
