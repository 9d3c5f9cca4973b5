use super::*;
use civicdb_entities as e;

fn id_string(id: e::id::Id) -> String {
    id.into()
}

macro_rules! impl_enum_conversions {
    ($boundary:ident, $entity:ty { $($variant:ident),+ $(,)? }) => {
        impl From<$entity> for $boundary {
            fn from(from: $entity) -> Self {
                type E = $entity;
                match from {
                    $(E::$variant => Self::$variant,)+
                }
            }
        }

        impl From<$boundary> for $entity {
            fn from(from: $boundary) -> Self {
                type E = $entity;
                match from {
                    $($boundary::$variant => E::$variant,)+
                }
            }
        }
    };
}

impl_enum_conversions!(UserRole, e::user::Role {
    Guest,
    User,
    Moderator,
    Admin,
});

impl_enum_conversions!(ReportStatus, e::report::ReportStatus {
    Pending,
    AuthorityContacted,
    EligibleForDrive,
    EligibleForVote,
    InProgress,
    UnderMonitoring,
    Resolved,
});

impl_enum_conversions!(DriveStatus, e::drive::DriveStatus {
    Planned,
    Ongoing,
    VotingFinalized,
    Completed,
});

impl_enum_conversions!(ContactMode, e::authority::ContactMode {
    Email,
    Phone,
    Website,
    SocialMedia,
    InPerson,
    Other,
});

impl_enum_conversions!(ContactStatus, e::authority::ContactStatus {
    Contacted,
    Responded,
    NoResponse,
});

impl_enum_conversions!(TaskStatus, e::task::TaskStatus {
    Open,
    Assigned,
    Completed,
});

impl_enum_conversions!(MonitoringStatus, e::monitoring::MonitoringStatus { Active, Completed });

impl_enum_conversions!(DiscussionPhase, e::discussion::DiscussionPhase {
    General,
    ReportVoting,
    DriveVoting,
});

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            email,
            display_name,
            password: _password,
            role,
            created_at,
        } = from;
        Self {
            id: id.into(),
            email: email.as_str().to_owned(),
            display_name,
            role: role.into(),
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::location::Location> for Location {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location {
            lat,
            lng,
            address,
            city,
        } = from;
        Self {
            lat,
            lng,
            address,
            city,
        }
    }
}

impl From<Location> for e::location::Location {
    fn from(from: Location) -> Self {
        let Location {
            lat,
            lng,
            address,
            city,
        } = from;
        Self {
            lat,
            lng,
            address,
            city,
        }
    }
}

impl From<e::report::Report> for Report {
    fn from(from: e::report::Report) -> Self {
        let e::report::Report {
            id,
            title,
            description,
            status,
            location,
            media_urls,
            reporter,
            votes,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            status: status.into(),
            location: location.into(),
            media_urls,
            reporter_id: reporter.into(),
            vote_count: votes.vote_count,
            final_vote_count: votes.final_vote_count,
            voting_open_at: votes.window.map(|w| w.open_at.as_millis()),
            voting_close_at: votes.window.map(|w| w.close_at.as_millis()),
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}

impl From<e::report::StatusLog> for StatusLog {
    fn from(from: e::report::StatusLog) -> Self {
        let e::report::StatusLog {
            id,
            report_id,
            from,
            to,
            changed_by,
            reason,
            created_at,
        } = from;
        Self {
            id: id.into(),
            report_id: report_id.into(),
            from: from.into(),
            to: to.into(),
            changed_by: changed_by.map(id_string),
            reason,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::report::ReportResolution> for Resolution {
    fn from(from: e::report::ReportResolution) -> Self {
        let e::report::ReportResolution {
            id,
            report_id,
            resolved_by,
            description,
            evidence_urls,
            created_at,
        } = from;
        Self {
            id: id.into(),
            report_id: report_id.into(),
            resolved_by: resolved_by.into(),
            description,
            evidence_urls,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::report::ReportVote> for Vote {
    fn from(from: e::report::ReportVote) -> Self {
        let e::report::ReportVote {
            id,
            report_id,
            user_id,
            created_at,
        } = from;
        Self {
            id: id.into(),
            target_id: report_id.into(),
            user_id: user_id.into(),
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::drive::DriveVote> for Vote {
    fn from(from: e::drive::DriveVote) -> Self {
        let e::drive::DriveVote {
            id,
            drive_id,
            user_id,
            created_at,
        } = from;
        Self {
            id: id.into(),
            target_id: drive_id.into(),
            user_id: user_id.into(),
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::authority::Authority> for Authority {
    fn from(from: e::authority::Authority) -> Self {
        let e::authority::Authority {
            id,
            name,
            category,
            role,
            city,
            contact,
            submitted_by,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            category,
            role,
            city,
            contact_mode: contact.mode().into(),
            email: contact.email().map(|email| email.as_str().to_owned()),
            phone: contact.phone().map(ToOwned::to_owned),
            website: contact.website().map(ToString::to_string),
            other_contact: contact.other_contact().map(ToOwned::to_owned),
            submitted_by: submitted_by.into(),
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::authority::ReportAuthority> for ReportAuthority {
    fn from(from: e::authority::ReportAuthority) -> Self {
        let e::authority::ReportAuthority {
            id,
            report_id,
            authority_id,
            status,
            contacted_by,
            message,
            contacted_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            report_id: report_id.into(),
            authority_id: authority_id.into(),
            status: status.into(),
            contacted_by: contacted_by.into(),
            message,
            contacted_at: contacted_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}

impl From<(e::authority::ReportAuthority, e::authority::Authority)> for AuthorityContact {
    fn from((contact, authority): (e::authority::ReportAuthority, e::authority::Authority)) -> Self {
        Self {
            contact: contact.into(),
            authority: authority.into(),
        }
    }
}

impl From<e::drive::Drive> for Drive {
    fn from(from: e::drive::Drive) -> Self {
        let e::drive::Drive {
            id,
            title,
            description,
            status,
            organizer,
            participant_target,
            date,
            location,
            votes,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            status: status.into(),
            organizer_id: organizer.into(),
            participant_target,
            date: date.map(e::time::Timestamp::as_millis),
            location: location.into(),
            vote_count: votes.vote_count,
            final_vote_count: votes.final_vote_count,
            voting_open_at: votes.window.map(|w| w.open_at.as_millis()),
            voting_close_at: votes.window.map(|w| w.close_at.as_millis()),
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
            report_ids: vec![],
        }
    }
}

impl From<(e::drive::Drive, Vec<e::id::Id>)> for Drive {
    fn from((drive, report_ids): (e::drive::Drive, Vec<e::id::Id>)) -> Self {
        Self {
            report_ids: report_ids.into_iter().map(id_string).collect(),
            ..drive.into()
        }
    }
}

impl From<e::drive::DriveVolunteer> for Volunteer {
    fn from(from: e::drive::DriveVolunteer) -> Self {
        let e::drive::DriveVolunteer {
            drive_id,
            user_id,
            joined_at,
        } = from;
        Self {
            drive_id: drive_id.into(),
            user_id: user_id.into(),
            joined_at: joined_at.as_millis(),
        }
    }
}

impl From<e::drive::DriveEnhancement> for Enhancement {
    fn from(from: e::drive::DriveEnhancement) -> Self {
        let e::drive::DriveEnhancement {
            id,
            drive_id,
            suggested_by,
            content,
            created_at,
        } = from;
        Self {
            id: id.into(),
            drive_id: drive_id.into(),
            suggested_by: suggested_by.into(),
            content,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::task::Task> for Task {
    fn from(from: e::task::Task) -> Self {
        let e::task::Task {
            id,
            drive_id,
            report_id,
            title,
            description,
            status,
            assignee,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            drive_id: drive_id.into(),
            report_id: report_id.map(id_string),
            title,
            description,
            status: status.into(),
            assignee_id: assignee.map(id_string),
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}

impl From<e::monitoring::Monitoring> for Monitoring {
    fn from(from: e::monitoring::Monitoring) -> Self {
        let e::monitoring::Monitoring {
            id,
            report_id,
            drive_id,
            monitor,
            status,
            notes,
            started_at,
            completed_at,
        } = from;
        Self {
            id: id.into(),
            report_id: report_id.into(),
            drive_id: drive_id.map(id_string),
            monitor_id: monitor.into(),
            status: status.into(),
            notes,
            started_at: started_at.as_millis(),
            completed_at: completed_at.map(e::time::Timestamp::as_millis),
        }
    }
}

impl From<e::discussion::Discussion> for Discussion {
    fn from(from: e::discussion::Discussion) -> Self {
        use e::discussion::DiscussionParent;
        let e::discussion::Discussion {
            id,
            parent,
            author,
            phase,
            content,
            created_at,
        } = from;
        let (report_id, drive_id) = match parent {
            DiscussionParent::Report(id) => (Some(id.into()), None),
            DiscussionParent::Drive(id) => (None, Some(id.into())),
        };
        Self {
            id: id.into(),
            report_id,
            drive_id,
            author_id: author.into(),
            phase: phase.into(),
            content,
            created_at: created_at.as_millis(),
        }
    }
}
