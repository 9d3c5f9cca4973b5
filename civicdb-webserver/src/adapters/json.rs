pub use civicdb_boundary::*;

use crate::core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> use case parameters

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    fn non_empty(s: Option<String>) -> Option<String> {
        s.and_then(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        })
    }

    pub fn new_user(from: NewUser) -> usecases::NewUser {
        let NewUser {
            email,
            display_name,
            password,
        } = from;
        usecases::NewUser {
            email,
            display_name,
            password,
        }
    }

    pub fn new_report(from: NewReport) -> usecases::NewReport {
        let NewReport {
            title,
            description,
            location,
            media_urls,
        } = from;
        usecases::NewReport {
            title,
            description,
            location: location.into(),
            media_urls,
        }
    }

    pub fn new_task(from: NewTask) -> usecases::NewTask {
        let NewTask {
            title,
            description,
            report_id,
        } = from;
        usecases::NewTask {
            title,
            description: non_empty(description),
            report_id: non_empty(report_id).map(e::Id::from),
        }
    }

    pub fn new_drive(from: NewDrive) -> usecases::NewDrive {
        let NewDrive {
            title,
            description,
            participant_target,
            date,
            location,
            tasks,
            report_id,
        } = from;
        usecases::NewDrive {
            title,
            description,
            participant_target,
            date: date.map(e::Timestamp::from_millis),
            location: location.into(),
            tasks: tasks.into_iter().map(new_task).collect(),
            report_id: non_empty(report_id).map(e::Id::from),
        }
    }

    pub fn new_authority(from: NewAuthority) -> usecases::NewAuthority {
        let NewAuthority {
            name,
            category,
            role,
            city,
            contact_mode,
            email,
            phone,
            website,
            other_contact,
        } = from;
        usecases::NewAuthority {
            name: non_empty(name),
            category: non_empty(category),
            role: non_empty(role),
            city: non_empty(city),
            contact_mode: non_empty(contact_mode),
            email: non_empty(email),
            phone: non_empty(phone),
            website: non_empty(website),
            other_contact: non_empty(other_contact),
        }
    }

    pub fn contact_authority(from: ContactAuthority) -> usecases::ContactAuthority {
        let ContactAuthority {
            authority_id,
            new_authority,
            message,
        } = from;
        let authority = match non_empty(authority_id) {
            Some(id) => usecases::AuthorityRef::Existing(id.into()),
            None => usecases::AuthorityRef::New(self::new_authority(new_authority)),
        };
        usecases::ContactAuthority {
            authority,
            message: non_empty(message),
        }
    }

    pub fn new_resolution(from: NewResolution) -> usecases::NewResolution {
        let NewResolution {
            description,
            evidence_urls,
        } = from;
        usecases::NewResolution {
            description,
            evidence_urls,
        }
    }

    pub fn new_monitoring(from: NewMonitoring) -> usecases::NewMonitoring {
        let NewMonitoring { drive_id, notes } = from;
        usecases::NewMonitoring {
            drive_id: non_empty(drive_id).map(e::Id::from),
            notes: non_empty(notes),
        }
    }

    pub fn new_discussion(from: NewDiscussion) -> usecases::NewDiscussion {
        let NewDiscussion {
            report_id,
            drive_id,
            phase,
            content,
        } = from;
        usecases::NewDiscussion {
            report_id: non_empty(report_id).map(e::Id::from),
            drive_id: non_empty(drive_id).map(e::Id::from),
            phase: phase.into(),
            content,
        }
    }
}

pub mod to_json {
    //! Use case results -> JSON

    use super::*;

    pub fn created_drive(from: usecases::CreatedDrive) -> CreatedDrive {
        let usecases::CreatedDrive {
            drive,
            tasks,
            report_ids,
        } = from;
        CreatedDrive {
            drive: (drive, report_ids).into(),
            tasks: tasks.into_iter().map(Into::into).collect(),
        }
    }

    pub fn deleted_drive(from: usecases::DeletedDrive) -> DeletedDrive {
        let usecases::DeletedDrive {
            tasks,
            report_links,
            votes,
            enhancements,
            monitorings,
            volunteers,
            discussions,
        } = from;
        DeletedDrive {
            tasks,
            report_links,
            votes,
            enhancements,
            monitorings,
            volunteers,
            discussions,
        }
    }

    pub fn vote_summary(from: usecases::VoteSummary) -> VoteSummary {
        let usecases::VoteSummary { count, has_voted } = from;
        VoteSummary { count, has_voted }
    }

    pub fn report_vote_created(from: usecases::ReportVoteOutcome) -> ReportVoteCreated {
        let usecases::ReportVoteOutcome {
            vote,
            vote_count,
            status,
            final_vote_count,
        } = from;
        let message = match final_vote_count {
            Some(count) => format!("Vote recorded, the report moved into progress with {count} votes"),
            None => "Vote recorded".to_owned(),
        };
        ReportVoteCreated {
            message,
            vote: vote.into(),
            vote_count,
            status: status.into(),
        }
    }

    pub fn drive_vote_created(from: usecases::DriveVoteOutcome) -> DriveVoteCreated {
        let usecases::DriveVoteOutcome {
            vote,
            vote_count,
            status,
            final_vote_count,
        } = from;
        let message = match final_vote_count {
            Some(count) => format!("Vote recorded, the drive started with {count} votes"),
            None => "Vote recorded".to_owned(),
        };
        DriveVoteCreated {
            message,
            vote: vote.into(),
            vote_count,
            status: status.into(),
        }
    }

    pub fn authority_contacted(from: usecases::ContactOutcome) -> AuthorityContacted {
        let usecases::ContactOutcome {
            contact,
            authority,
            status,
        } = from;
        AuthorityContacted {
            message: format!("Contacted {} {} of {}", authority.category, authority.role, authority.city),
            contact: contact.into(),
            authority: authority.into(),
            report_status: status.into(),
        }
    }

    pub fn resolved_report(from: usecases::ResolveOutcome) -> ResolvedReport {
        let usecases::ResolveOutcome {
            resolution,
            completed_monitorings,
        } = from;
        ResolvedReport {
            resolution: resolution.into(),
            completed_monitorings,
        }
    }
}
