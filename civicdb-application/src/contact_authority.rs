use super::*;

pub fn contact_authority(
    connections: &sqlite::Connections,
    account_id: &Id,
    report_id: &Id,
    contact: usecases::ContactAuthority,
) -> Result<usecases::ContactOutcome> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::contact_authority(conn, &user, report_id, contact, now).map_err(|err| {
            warn!("Failed to contact authority for report {}: {}", report_id, err);
            err
        })
    })?)
}

pub fn create_authority(
    connections: &sqlite::Connections,
    account_id: &Id,
    new_authority: usecases::NewAuthority,
) -> Result<Authority> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::create_authority(conn, &user, new_authority, now).map_err(|err| {
            warn!("Failed to create authority: {}", err);
            err
        })
    })?)
}

pub fn update_contact_status(
    connections: &sqlite::Connections,
    account_id: &Id,
    report_id: &Id,
    authority_id: &Id,
    status: ContactStatus,
) -> Result<ReportAuthority> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::update_contact_status(conn, &user, report_id, authority_id, status, now)
            .map_err(|err| {
                warn!(
                    "Failed to update contact status of authority {} for report {}: {}",
                    authority_id, report_id, err
                );
                err
            })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn city_works_department() -> usecases::NewAuthority {
        usecases::NewAuthority {
            name: Some("Public Works".into()),
            category: Some("Roads".into()),
            role: Some("Department head".into()),
            city: Some("Springfield".into()),
            contact_mode: Some("EMAIL".into()),
            email: Some("works@springfield.example.com".into()),
            ..Default::default()
        }
    }

    fn contact_new(
        fixture: &BackendFixture,
        user: &User,
        report_id: &Id,
        new: usecases::NewAuthority,
    ) -> super::Result<usecases::ContactOutcome> {
        flows::contact_authority(
            &fixture.db_connections,
            &user.id,
            report_id,
            usecases::ContactAuthority {
                authority: usecases::AuthorityRef::New(new),
                message: Some("Please have a look".into()),
            },
        )
    }

    #[test]
    fn contact_new_authority_once() {
        let fixture = BackendFixture::new();
        let user = fixture.register("reporter@example.com");
        let report = fixture.create_report(&user, "Damaged sidewalk");

        let outcome = contact_new(&fixture, &user, &report.id, city_works_department()).unwrap();
        assert_eq!(outcome.status, ReportStatus::AuthorityContacted);
        assert_eq!(outcome.contact.status, ContactStatus::Contacted);

        // The same office is recognized and must not be contacted twice
        let err = contact_new(&fixture, &user, &report.id, city_works_department()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::AlreadyContacted))
        ));

        let db = fixture.db_connections.shared().unwrap();
        let authorities = db
            .list_authorities(&Default::default(), &Default::default())
            .unwrap();
        assert_eq!(authorities.len(), 1);
        let logs = db.list_status_logs(&report.id).unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].to, ReportStatus::AuthorityContacted);
    }

    #[test]
    fn incomplete_new_authority_is_rolled_back() {
        let fixture = BackendFixture::new();
        let user = fixture.register("reporter@example.com");
        let report = fixture.create_report(&user, "Damaged sidewalk");

        let new = usecases::NewAuthority {
            category: None,
            ..city_works_department()
        };
        let err = contact_new(&fixture, &user, &report.id, new).unwrap_err();
        assert_eq!(
            err.to_string(),
            "New authority requires category, role, and city"
        );

        let missing_email = usecases::NewAuthority {
            email: None,
            ..city_works_department()
        };
        let err = contact_new(&fixture, &user, &report.id, missing_email).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::MissingContact))
        ));

        let db = fixture.db_connections.shared().unwrap();
        assert!(db
            .list_authorities(&Default::default(), &Default::default())
            .unwrap()
            .is_empty());
        assert_eq!(db.get_report(&report.id).unwrap().status, ReportStatus::Pending);
    }

    #[test]
    fn record_the_response_of_an_authority() {
        let fixture = BackendFixture::new();
        let user = fixture.register("reporter@example.com");
        let report = fixture.create_report(&user, "Damaged sidewalk");
        let authority =
            flows::create_authority(&fixture.db_connections, &user.id, city_works_department())
                .unwrap();
        assert!(matches!(
            flows::create_authority(&fixture.db_connections, &user.id, city_works_department()),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::AuthorityExists
            )))
        ));

        flows::contact_authority(
            &fixture.db_connections,
            &user.id,
            &report.id,
            usecases::ContactAuthority {
                authority: usecases::AuthorityRef::Existing(authority.id.clone()),
                message: None,
            },
        )
        .unwrap();
        let contact = flows::update_contact_status(
            &fixture.db_connections,
            &user.id,
            &report.id,
            &authority.id,
            ContactStatus::Responded,
        )
        .unwrap();
        assert_eq!(contact.status, ContactStatus::Responded);
    }
}
