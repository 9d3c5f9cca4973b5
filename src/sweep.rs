use civicdb_application::prelude::escalate_reports;
use civicdb_core::lifecycle::LifecycleRules;
use civicdb_db_sqlite::Connections;
use std::time::Duration;

/// Escalates stale pending reports on every tick of the interval.
pub async fn run(connections: Connections, rules: LifecycleRules, task_interval_time: Duration) {
    log::info!("Escalating stale reports every {task_interval_time:?}");
    let mut interval = tokio::time::interval(task_interval_time);
    loop {
        interval.tick().await;
        match escalate_reports(&connections, &rules) {
            Ok(0) => log::debug!("No stale reports"),
            Ok(count) => log::info!("Escalated {count} stale report(s)"),
            Err(err) => log::warn!("Stale reports could not be escalated: {err}"),
        }
    }
}
