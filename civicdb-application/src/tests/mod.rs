pub mod prelude {

    use std::sync::OnceLock;

    pub use civicdb_core::{
        db::*,
        entities::*,
        lifecycle::LifecycleRules,
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use civicdb_entities::builders::*;

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub const DEFAULT_PASSWORD: &str = "correct horse";

    /// Hashing is slow, so all fixture users share the same hash.
    fn default_password() -> Password {
        static HASH: OnceLock<Password> = OnceLock::new();
        HASH.get_or_init(|| DEFAULT_PASSWORD.parse().unwrap())
            .clone()
    }

    pub fn new_user(email: &str) -> usecases::NewUser {
        usecases::NewUser {
            email: email.into(),
            display_name: "Jo".into(),
            password: DEFAULT_PASSWORD.into(),
        }
    }

    pub fn new_report(title: &str) -> usecases::NewReport {
        usecases::NewReport {
            title: title.into(),
            description: "Please take care of it".into(),
            location: Location {
                lat: Some(48.1),
                lng: Some(11.6),
                address: Some("Main Street 1".into()),
                city: Some("Springfield".into()),
            },
            media_urls: vec!["https://img.example.com/before.jpg".into()],
        }
    }

    pub fn new_drive(title: &str) -> usecases::NewDrive {
        usecases::NewDrive {
            title: title.into(),
            description: "Everybody is welcome".into(),
            participant_target: 10,
            ..Default::default()
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub rules: LifecycleRules,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            civicdb_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self {
                db_connections,
                rules: LifecycleRules::default(),
            }
        }

        pub fn register(&self, email: &str) -> User {
            self.register_with_role(email, Role::User)
        }

        pub fn register_with_role(&self, email: &str, role: Role) -> User {
            let user = User {
                id: Id::new(),
                email: email.parse().unwrap(),
                display_name: email.split('@').next().unwrap().into(),
                password: default_password(),
                role,
                created_at: Timestamp::now(),
            };
            self.db_connections
                .exclusive()
                .unwrap()
                .create_user(&user)
                .unwrap();
            user
        }

        pub fn create_report(&self, reporter: &User, title: &str) -> Report {
            flows::create_report(&self.db_connections, &reporter.id, new_report(title)).unwrap()
        }

        pub fn get_report(&self, id: &Id) -> Report {
            self.db_connections
                .shared()
                .unwrap()
                .get_report(id)
                .unwrap()
        }
    }
}
