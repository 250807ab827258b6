//! Background sweeper for expired holds and past-dated shows
//!
//! Runs in a tokio::spawn loop. Each tick releases holds whose TTL
//! lapsed and deactivates shows dated before today. A hold that is
//! claimed between the collect and the release steps is left alone,
//! because the release only touches seats still BLOCKED.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::time::Duration;
use tracing::{info, warn};

use crate::domain::RepositoryProvider;
use crate::notifications::events::{
    Event, HoldsExpiredEvent, SeatState, SeatsChangedEvent, ShowsDeactivatedEvent,
};
use crate::notifications::SharedEventBus;
use crate::shared::shutdown::ShutdownSignal;

/// Start the expiry sweeper background task.
pub fn start_expiry_sweeper(
    repos: Arc<dyn RepositoryProvider>,
    event_bus: SharedEventBus,
    shutdown: ShutdownSignal,
    sweep_interval_secs: u64,
) {
    tokio::spawn(async move {
        info!(
            sweep_interval = sweep_interval_secs,
            "🧹 Expiry sweeper started"
        );

        let mut interval = tokio::time::interval(Duration::from_secs(sweep_interval_secs));

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Err(e) = sweep_expired_holds(&repos, &event_bus).await {
                        warn!(error = %e, "Expired hold sweep error");
                    }
                    if let Err(e) = deactivate_past_shows(&repos, &event_bus).await {
                        warn!(error = %e, "Past show sweep error");
                    }
                }
                _ = shutdown.notified().wait() => {
                    info!("🧹 Expiry sweeper shutting down");
                    break;
                }
            }
        }

        info!("🧹 Expiry sweeper stopped");
    });
}

async fn sweep_expired_holds(
    repos: &Arc<dyn RepositoryProvider>,
    event_bus: &SharedEventBus,
) -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now();
    let expired = repos.seats().find_expired_holds(now).await?;

    if expired.is_empty() {
        return Ok(());
    }

    let ids: Vec<i64> = expired.iter().map(|s| s.id).collect();
    let freed = repos.seats().release_holds(&ids).await?;

    if freed.is_empty() {
        return Ok(());
    }

    metrics::counter!("holds_expired_total").increment(freed.len() as u64);
    info!(count = freed.len(), "Released expired seat holds");

    event_bus.publish(Event::HoldsExpired(HoldsExpiredEvent {
        released_seats: freed.len(),
        timestamp: now,
    }));

    // One seat map update per affected screen
    let mut by_screen: HashMap<i64, Vec<SeatState>> = HashMap::new();
    for seat in freed {
        by_screen.entry(seat.screen_id).or_default().push(SeatState {
            seat_id: seat.id,
            seat_code: seat.seat_code,
            status: seat.status.as_str().to_string(),
        });
    }
    for (screen_id, seats) in by_screen {
        event_bus.publish(Event::SeatsChanged(SeatsChangedEvent {
            screen_id,
            seats,
            timestamp: now,
        }));
    }

    Ok(())
}

async fn deactivate_past_shows(
    repos: &Arc<dyn RepositoryProvider>,
    event_bus: &SharedEventBus,
) -> Result<(), Box<dyn std::error::Error>> {
    let today = Utc::now().date_naive();
    let past = repos.shows().find_active_before(today).await?;

    if past.is_empty() {
        return Ok(());
    }

    let ids: Vec<i64> = past.iter().map(|s| s.id).collect();
    let deactivated = repos.shows().set_inactive(&ids).await?;

    metrics::counter!("shows_deactivated_total").increment(deactivated);
    info!(count = deactivated, "Deactivated past-dated shows");

    event_bus.publish(Event::ShowsDeactivated(ShowsDeactivatedEvent {
        deactivated_shows: deactivated,
        timestamp: Utc::now(),
    }));

    Ok(())
}
