use super::*;

fn auto_update_reports(
    connections: &sqlite::Connections,
    cfg: &Cfg,
    auth: &Auth,
) -> Result<json::SweepResult> {
    auth.cron_job(cfg)?;
    let updated = flows::escalate_reports(connections, &cfg.lifecycle)?;
    info!("Escalated {updated} stale reports");
    Ok(Json(json::SweepResult {
        success: true,
        updated,
    }))
}

#[post("/cron/auto-update-reports")]
pub fn post_auto_update_reports(
    connections: sqlite::Connections,
    cfg: &State<Cfg>,
    auth: Auth,
) -> Result<json::SweepResult> {
    auto_update_reports(&connections, cfg, &auth)
}

// Some schedulers can only send GET requests
#[get("/cron/auto-update-reports")]
pub fn get_auto_update_reports(
    connections: sqlite::Connections,
    cfg: &State<Cfg>,
    auth: Auth,
) -> Result<json::SweepResult> {
    auto_update_reports(&connections, cfg, &auth)
}
