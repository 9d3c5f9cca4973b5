use super::*;

impl_repo_for_connections!(AuthorityRepo {
    fn create_authority(&self, authority: &Authority) -> Result<()>;
    fn get_authority(&self, id: &Id) -> Result<Authority>;
    fn list_authorities(&self, query: &AuthorityQuery, pagination: &Pagination) -> Result<Vec<Authority>>;
    fn find_same_authority(&self, authority: &Authority) -> Result<Option<Authority>>;
});

impl_repo_for_connections!(ReportAuthorityRepo {
    fn create_report_authority(&self, contact: &ReportAuthority) -> Result<()>;
    fn try_get_report_authority(&self, report_id: &Id, authority_id: &Id) -> Result<Option<ReportAuthority>>;
    fn update_report_authority_status(&self, id: &Id, status: ContactStatus, at: Timestamp) -> Result<()>;
    fn list_report_authorities(&self, report_id: &Id) -> Result<Vec<ReportAuthority>>;
    fn delete_report_authorities_of_report(&self, report_id: &Id) -> Result<usize>;
});

fn load_contact_channel(
    mode: ContactMode,
    email: Option<String>,
    phone: Option<String>,
    website: Option<String>,
    other_contact: Option<String>,
) -> Result<ContactChannel> {
    let missing = || anyhow!("Missing contact for mode {mode}");
    let channel = match mode {
        ContactMode::Email => {
            let email = email.ok_or_else(missing)?;
            ContactChannel::Email(EmailAddress::new_unchecked(email))
        }
        ContactMode::Phone => ContactChannel::Phone(phone.ok_or_else(missing)?),
        ContactMode::Website => {
            let website = website.ok_or_else(missing)?;
            let url = website
                .parse::<Url>()
                .map_err(|err| anyhow!("Invalid website {website}: {err}"))?;
            ContactChannel::Website(url)
        }
        ContactMode::SocialMedia | ContactMode::InPerson | ContactMode::Other => {
            ContactChannel::Other {
                mode,
                contact: other_contact.ok_or_else(missing)?,
            }
        }
    };
    Ok(channel)
}

impl TryFrom<models::AuthorityEntity> for Authority {
    type Error = repo::Error;
    fn try_from(from: models::AuthorityEntity) -> Result<Self> {
        let models::AuthorityEntity {
            id,
            name,
            category,
            role,
            city,
            contact_mode,
            email,
            phone,
            website,
            other_contact,
            submitted_by,
            created_at,
        } = from;
        let mode = load_primitive(contact_mode)?;
        Ok(Self {
            id: id.into(),
            name,
            category,
            role,
            city,
            contact: load_contact_channel(mode, email, phone, website, other_contact)?,
            submitted_by: submitted_by.into(),
            created_at: Timestamp::from_millis(created_at),
        })
    }
}

impl TryFrom<models::ReportAuthorityEntity> for ReportAuthority {
    type Error = repo::Error;
    fn try_from(from: models::ReportAuthorityEntity) -> Result<Self> {
        let models::ReportAuthorityEntity {
            id,
            report_id,
            authority_id,
            status,
            contacted_by,
            message,
            contacted_at,
            updated_at,
        } = from;
        Ok(Self {
            id: id.into(),
            report_id: report_id.into(),
            authority_id: authority_id.into(),
            status: load_primitive(status)?,
            contacted_by: contacted_by.into(),
            message,
            contacted_at: Timestamp::from_millis(contacted_at),
            updated_at: Timestamp::from_millis(updated_at),
        })
    }
}

fn create_authority(conn: &mut SqliteConnection, a: &Authority) -> Result<()> {
    let new_authority = models::NewAuthority {
        id: a.id.as_str(),
        name: a.name.as_deref(),
        category: &a.category,
        role: &a.role,
        city: &a.city,
        contact_mode: a.contact.mode().into(),
        email: a.contact.email().map(EmailAddress::as_str),
        phone: a.contact.phone(),
        website: a.contact.website().map(Url::as_str),
        other_contact: a.contact.other_contact(),
        submitted_by: a.submitted_by.as_str(),
        created_at: a.created_at.as_millis(),
    };
    diesel::insert_into(schema::authorities::table)
        .values(&new_authority)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_authority(conn: &mut SqliteConnection, id: &Id) -> Result<Authority> {
    use schema::authorities::dsl;
    dsl::authorities
        .filter(dsl::id.eq(id.as_str()))
        .select(models::AuthorityEntity::as_select())
        .first(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn list_authorities(
    conn: &mut SqliteConnection,
    query: &AuthorityQuery,
    pagination: &Pagination,
) -> Result<Vec<Authority>> {
    use schema::authorities::dsl;
    let mut select = dsl::authorities
        .select(models::AuthorityEntity::as_select())
        .order_by((dsl::city, dsl::category, dsl::role, dsl::id))
        .into_boxed();
    // LIKE without wildcards is case-insensitive for ASCII in SQLite
    if let Some(city) = &query.city {
        select = select.filter(dsl::city.like(city.clone()));
    }
    if let Some(category) = &query.category {
        select = select.filter(dsl::category.like(category.clone()));
    }
    apply_pagination(select, pagination)
        .load(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}

fn find_same_authority(conn: &mut SqliteConnection, a: &Authority) -> Result<Option<Authority>> {
    use schema::authorities::dsl;
    let candidates = dsl::authorities
        .filter(dsl::city.like(a.city.clone()))
        .filter(dsl::contact_mode.eq(i16::from(a.contact.mode())))
        .select(models::AuthorityEntity::as_select())
        .load(conn)
        .map_err(from_diesel_err)?;
    for candidate in candidates {
        let candidate = Authority::try_from(candidate)?;
        if candidate.is_same_office(a) {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

fn create_report_authority(conn: &mut SqliteConnection, c: &ReportAuthority) -> Result<()> {
    let new_contact = models::NewReportAuthority {
        id: c.id.as_str(),
        report_id: c.report_id.as_str(),
        authority_id: c.authority_id.as_str(),
        status: c.status.into(),
        contacted_by: c.contacted_by.as_str(),
        message: c.message.as_deref(),
        contacted_at: c.contacted_at.as_millis(),
        updated_at: c.updated_at.as_millis(),
    };
    diesel::insert_into(schema::report_authorities::table)
        .values(&new_contact)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn try_get_report_authority(
    conn: &mut SqliteConnection,
    report_id: &Id,
    authority_id: &Id,
) -> Result<Option<ReportAuthority>> {
    use schema::report_authorities::dsl;
    dsl::report_authorities
        .filter(dsl::report_id.eq(report_id.as_str()))
        .filter(dsl::authority_id.eq(authority_id.as_str()))
        .select(models::ReportAuthorityEntity::as_select())
        .first(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(TryInto::try_into)
        .transpose()
}

fn update_report_authority_status(
    conn: &mut SqliteConnection,
    id: &Id,
    status: ContactStatus,
    at: Timestamp,
) -> Result<()> {
    use schema::report_authorities::dsl;
    let count = diesel::update(dsl::report_authorities.filter(dsl::id.eq(id.as_str())))
        .set((
            dsl::status.eq(i16::from(status)),
            dsl::updated_at.eq(at.as_millis()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn list_report_authorities(
    conn: &mut SqliteConnection,
    report_id: &Id,
) -> Result<Vec<ReportAuthority>> {
    use schema::report_authorities::dsl;
    dsl::report_authorities
        .filter(dsl::report_id.eq(report_id.as_str()))
        .order_by((dsl::contacted_at, dsl::id))
        .select(models::ReportAuthorityEntity::as_select())
        .load(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}

fn delete_report_authorities_of_report(
    conn: &mut SqliteConnection,
    report_id: &Id,
) -> Result<usize> {
    use schema::report_authorities::dsl;
    diesel::delete(dsl::report_authorities.filter(dsl::report_id.eq(report_id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)
}
