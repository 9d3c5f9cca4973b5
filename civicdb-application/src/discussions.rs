use super::*;

pub fn create_discussion(
    connections: &sqlite::Connections,
    account_id: &Id,
    new_discussion: usecases::NewDiscussion,
) -> Result<Discussion> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::create_discussion(conn, &user, new_discussion, now).map_err(|err| {
            warn!("Failed to create discussion: {}", err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn discuss(report_id: Option<&Id>, phase: DiscussionPhase) -> usecases::NewDiscussion {
        usecases::NewDiscussion {
            report_id: report_id.cloned(),
            drive_id: None,
            phase,
            content: "What about the bus stop?".into(),
        }
    }

    #[test]
    fn voting_discussions_follow_the_report_status() {
        let fixture = BackendFixture::new();
        let reporter = fixture.register("reporter@example.com");
        let voter = fixture.register("voter@example.com");
        let report = fixture.create_report(&reporter, "Unsafe crossing");
        let db = &fixture.db_connections;

        flows::create_discussion(db, &voter.id, discuss(Some(&report.id), DiscussionPhase::General))
            .unwrap();
        assert!(matches!(
            flows::create_discussion(
                db,
                &voter.id,
                discuss(Some(&report.id), DiscussionPhase::ReportVoting)
            ),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::PhaseClosed
            )))
        ));

        flows::cast_report_vote(db, &fixture.rules, &voter.id, &report.id).unwrap();
        flows::create_discussion(
            db,
            &voter.id,
            discuss(Some(&report.id), DiscussionPhase::ReportVoting),
        )
        .unwrap();

        let parent = usecases::discussion_parent(Some(report.id.clone()), None).unwrap();
        let conn = db.shared().unwrap();
        assert_eq!(usecases::list_discussions(&conn, &parent, None).unwrap().len(), 2);
        assert_eq!(
            usecases::list_discussions(&conn, &parent, Some(DiscussionPhase::ReportVoting))
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn require_exactly_one_parent() {
        let fixture = BackendFixture::new();
        let user = fixture.register("user@example.com");
        assert!(matches!(
            flows::create_discussion(
                &fixture.db_connections,
                &user.id,
                discuss(None, DiscussionPhase::General)
            ),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::DiscussionParent
            )))
        ));
    }
}
