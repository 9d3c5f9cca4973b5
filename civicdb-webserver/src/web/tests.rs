use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use crate::web::{sqlite, Cfg};

pub mod prelude {

    pub const DUMMY_VERSION: &str = "3.2.1";

    pub use rocket::{
        http::{ContentType, Cookie, Header, Status},
        local::blocking::{Client, LocalRequest, LocalResponse},
    };

    pub use civicdb_core::repositories::*;

    pub use super::{setup, setup_with_cfg};
}

fn rocket_test_instance_with_cfg(
    mounts: Vec<(&'static str, Vec<Route>)>,
    cfg: Cfg,
    rocket_cfg: RocketCfg,
) -> (rocket::Rocket<rocket::Build>, sqlite::Connections) {
    let _ = env_logger::builder().is_test(true).try_init();
    let connections = civicdb_db_sqlite::Connections::init(":memory:", 1).unwrap();
    civicdb_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    let db = sqlite::Connections::from(connections);
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(rocket_cfg),
        cfg,
        version: prelude::DUMMY_VERSION,
    };
    let rocket = super::rocket_instance(options, db.clone());
    (rocket, db)
}

pub fn setup() -> (Client, sqlite::Connections) {
    setup_with_cfg(Cfg::default())
}

pub fn setup_with_cfg(cfg: Cfg) -> (Client, sqlite::Connections) {
    let rocket_cfg = RocketCfg::debug_default();
    let (rocket, db) = rocket_test_instance_with_cfg(super::mounts(), cfg, rocket_cfg);
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}
