use super::{change_status::try_advance_report, prelude::*};
use crate::{
    util::validate::{non_empty, Validate},
    RepoError,
};
use civicdb_entities::url::Url;

/// User input for a new authority.
///
/// All fields are optional here to report precise errors.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewAuthority {
    pub name          : Option<String>,
    pub category      : Option<String>,
    pub role          : Option<String>,
    pub city          : Option<String>,
    pub contact_mode  : Option<String>,
    pub email         : Option<String>,
    pub phone         : Option<String>,
    pub website       : Option<String>,
    pub other_contact : Option<String>,
}

#[derive(Debug, Clone)]
pub enum AuthorityRef {
    Existing(Id),
    New(NewAuthority),
}

#[derive(Debug, Clone)]
pub struct ContactAuthority {
    pub authority: AuthorityRef,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ContactOutcome {
    pub contact: ReportAuthority,
    pub authority: Authority,
    pub status: ReportStatus,
}

/// Builds the single contact channel selected by the contact mode.
///
/// Contact fields that do not belong to the mode are discarded.
fn contact_channel(new: &NewAuthority) -> Result<ContactChannel> {
    let mode = new
        .contact_mode
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or(Error::ContactMode)?
        .parse::<ContactMode>()
        .map_err(|_| Error::ContactMode)?;
    let field = match mode {
        ContactMode::Email => &new.email,
        ContactMode::Phone => &new.phone,
        ContactMode::Website => &new.website,
        ContactMode::SocialMedia | ContactMode::InPerson | ContactMode::Other => {
            &new.other_contact
        }
    };
    let value = non_empty(field.clone()).ok_or(Error::MissingContact)?;
    let channel = match mode {
        ContactMode::Email => ContactChannel::Email(value.parse()?),
        ContactMode::Phone => ContactChannel::Phone(value),
        ContactMode::Website => ContactChannel::Website(value.parse::<Url>()?),
        mode => ContactChannel::Other {
            mode,
            contact: value,
        },
    };
    channel.validate()?;
    Ok(channel)
}

pub fn prepare_new_authority(new: NewAuthority, submitted_by: &Id, now: Timestamp) -> Result<Authority> {
    let (Some(category), Some(role), Some(city)) = (
        non_empty(new.category.clone()),
        non_empty(new.role.clone()),
        non_empty(new.city.clone()),
    ) else {
        return Err(Error::NewAuthorityIncomplete);
    };
    let contact = contact_channel(&new)?;
    Ok(Authority {
        id: Id::new(),
        name: non_empty(new.name),
        category,
        role,
        city,
        contact,
        submitted_by: submitted_by.clone(),
        created_at: now,
    })
}

pub fn create_authority<R: AuthorityRepo>(
    repo: &R,
    user: &User,
    new: NewAuthority,
    now: Timestamp,
) -> Result<Authority> {
    let authority = prepare_new_authority(new, &user.id, now)?;
    if repo.find_same_authority(&authority)?.is_some() {
        return Err(Error::AuthorityExists);
    }
    repo.create_authority(&authority)?;
    log::info!("Created authority {} in {}", authority.id, authority.city);
    Ok(authority)
}

pub fn list_authorities<R: AuthorityRepo>(
    repo: &R,
    query: &AuthorityQuery,
    pagination: &Pagination,
) -> Result<Vec<Authority>> {
    Ok(repo.list_authorities(query, pagination)?)
}

/// Records that an authority has been contacted about a report.
///
/// A new authority that describes an already known office
/// is reused instead of being duplicated.
///
/// Must be executed within a single transaction.
pub fn contact_authority<R>(
    repo: &R,
    user: &User,
    report_id: &Id,
    contact: ContactAuthority,
    now: Timestamp,
) -> Result<ContactOutcome>
where
    R: ReportRepo + StatusLogRepo + AuthorityRepo + ReportAuthorityRepo,
{
    let ContactAuthority { authority, message } = contact;
    let report = repo.get_report(report_id)?;
    let authority = match authority {
        AuthorityRef::Existing(id) => repo.get_authority(&id)?,
        AuthorityRef::New(new) => {
            let new = prepare_new_authority(new, &user.id, now)?;
            if let Some(existing) = repo.find_same_authority(&new)? {
                log::debug!("Reusing existing authority {}", existing.id);
                existing
            } else {
                repo.create_authority(&new)?;
                log::info!("Created authority {} in {}", new.id, new.city);
                new
            }
        }
    };
    if repo
        .try_get_report_authority(report_id, &authority.id)?
        .is_some()
    {
        return Err(Error::AlreadyContacted);
    }
    let contact = ReportAuthority {
        id: Id::new(),
        report_id: report_id.clone(),
        authority_id: authority.id.clone(),
        status: ContactStatus::Contacted,
        contacted_by: user.id.clone(),
        message: non_empty(message),
        contacted_at: now,
        updated_at: now,
    };
    repo.create_report_authority(&contact)
        .map_err(|err| match err {
            RepoError::AlreadyExists => Error::AlreadyContacted,
            err => err.into(),
        })?;
    let status = try_advance_report(
        repo,
        &report,
        ReportStatus::AuthorityContacted,
        Some(&user.id),
        "Authority contacted",
        now,
    )?
    .map(|log| log.to)
    .unwrap_or(report.status);
    Ok(ContactOutcome {
        contact,
        authority,
        status,
    })
}

pub fn update_contact_status<R>(
    repo: &R,
    user: &User,
    report_id: &Id,
    authority_id: &Id,
    status: ContactStatus,
    now: Timestamp,
) -> Result<ReportAuthority>
where
    R: ReportAuthorityRepo,
{
    let mut contact = repo
        .try_get_report_authority(report_id, authority_id)?
        .ok_or(RepoError::NotFound)?;
    super::authorize_owner_or_moderator(user, &contact.contacted_by)?;
    repo.update_report_authority_status(&contact.id, status, now)?;
    contact.status = status;
    contact.updated_at = now;
    Ok(contact)
}

pub fn contacts_of_report<R>(repo: &R, report_id: &Id) -> Result<Vec<(ReportAuthority, Authority)>>
where
    R: ReportRepo + AuthorityRepo + ReportAuthorityRepo,
{
    repo.get_report(report_id)?;
    repo.list_report_authorities(report_id)?
        .into_iter()
        .map(|contact| -> Result<_> {
            let authority = repo.get_authority(&contact.authority_id)?;
            Ok((contact, authority))
        })
        .collect()
}
