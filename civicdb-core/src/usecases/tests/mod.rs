use std::cell::RefCell;

use crate::{entities::*, repositories::*, RepoError};

type RepoResult<T> = std::result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> &str;
}

macro_rules! impl_key {
    ($($t:ty),*) => {
        $(
            impl Key for $t {
                fn key(&self) -> &str {
                    self.id.as_ref()
                }
            }
        )*
    };
}

impl_key!(
    User,
    Report,
    ReportVote,
    StatusLog,
    ReportResolution,
    Authority,
    ReportAuthority,
    Drive,
    DriveVote,
    DriveEnhancement,
    Task,
    Monitoring,
    Discussion
);

fn get<T: Clone + Key>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.key() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == e.key()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn remove_where<T>(objects: &mut Vec<T>, f: impl Fn(&T) -> bool) -> usize {
    let len_before = objects.len();
    objects.retain(|x| !f(x));
    len_before - objects.len()
}

fn paginate<T>(objects: Vec<T>, pagination: &Pagination) -> Vec<T> {
    let offset = pagination.offset.unwrap_or(0) as usize;
    let limit = pagination.limit.map(|l| l as usize).unwrap_or(usize::MAX);
    objects.into_iter().skip(offset).take(limit).collect()
}

/// In-memory repositories for testing the use cases.
#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub reports: RefCell<Vec<Report>>,
    pub report_votes: RefCell<Vec<ReportVote>>,
    pub status_logs: RefCell<Vec<StatusLog>>,
    pub resolutions: RefCell<Vec<ReportResolution>>,
    pub authorities: RefCell<Vec<Authority>>,
    pub report_authorities: RefCell<Vec<ReportAuthority>>,
    pub drives: RefCell<Vec<Drive>>,
    pub drive_reports: RefCell<Vec<(Id, Id)>>,
    pub drive_votes: RefCell<Vec<DriveVote>>,
    pub volunteers: RefCell<Vec<DriveVolunteer>>,
    pub enhancements: RefCell<Vec<DriveEnhancement>>,
    pub tasks: RefCell<Vec<Task>>,
    pub monitorings: RefCell<Vec<Monitoring>>,
    pub discussions: RefCell<Vec<Discussion>>,
    /// Tables in the order in which rows have been deleted
    pub deletions: RefCell<Vec<&'static str>>,
}

impl MockDb {
    pub fn add_user(&self, email: &str, role: Role) -> User {
        let user = User {
            id: Id::new(),
            email: EmailAddress::new_unchecked(email.to_string()),
            display_name: email.split('@').next().unwrap_or_default().to_string(),
            password: Password::from_hash(String::new()),
            role,
            created_at: Timestamp::now(),
        };
        self.users.borrow_mut().push(user.clone());
        user
    }

    fn deleted(&self, table: &'static str, count: usize) -> usize {
        if count > 0 {
            self.deletions.borrow_mut().push(table);
        }
        count
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self.users.borrow().iter().any(|u| u.email == user.email) {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.users.borrow_mut(), user.clone())
    }
    fn update_user_role(&self, id: &Id, role: Role) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        let user = users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or(RepoError::NotFound)?;
        user.role = role;
        Ok(())
    }
    fn get_user_by_id(&self, id: &Id) -> RepoResult<User> {
        get(&self.users.borrow(), id.as_str())
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> RepoResult<User> {
        self.try_get_user_by_email(email)?.ok_or(RepoError::NotFound)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }
    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl ReportRepo for MockDb {
    fn create_report(&self, report: &Report) -> RepoResult<()> {
        create(&mut self.reports.borrow_mut(), report.clone())
    }
    fn get_report(&self, id: &Id) -> RepoResult<Report> {
        get(&self.reports.borrow(), id.as_str())
    }
    fn list_reports(&self, query: &ReportQuery, pagination: &Pagination) -> RepoResult<Vec<Report>> {
        let mut reports: Vec<_> = self
            .reports
            .borrow()
            .iter()
            .filter(|r| query.status.map_or(true, |s| r.status == s))
            .filter(|r| query.reporter.as_ref().map_or(true, |id| &r.reporter == id))
            .cloned()
            .collect();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(reports, pagination))
    }
    fn update_report_content(&self, report: &Report) -> RepoResult<()> {
        update(&mut self.reports.borrow_mut(), report)
    }
    fn set_report_status(&self, id: &Id, status: ReportStatus, at: Timestamp) -> RepoResult<()> {
        let mut reports = self.reports.borrow_mut();
        let report = reports
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or(RepoError::NotFound)?;
        report.status = status;
        report.updated_at = at;
        Ok(())
    }
    fn open_report_voting(&self, id: &Id, window: &VotingWindow) -> RepoResult<bool> {
        let mut reports = self.reports.borrow_mut();
        let report = reports
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or(RepoError::NotFound)?;
        if report.votes.window.is_some() {
            return Ok(false);
        }
        report.votes.window = Some(*window);
        Ok(true)
    }
    fn increment_report_vote_count(&self, id: &Id) -> RepoResult<u32> {
        let mut reports = self.reports.borrow_mut();
        let report = reports
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or(RepoError::NotFound)?;
        report.votes.vote_count += 1;
        Ok(report.votes.vote_count)
    }
    fn promote_report_on_vote_threshold(
        &self,
        id: &Id,
        threshold: u32,
        at: Timestamp,
    ) -> RepoResult<Option<u32>> {
        let mut reports = self.reports.borrow_mut();
        let report = reports
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or(RepoError::NotFound)?;
        if report.votes.vote_count < threshold || report.votes.final_vote_count.is_some() {
            return Ok(None);
        }
        report.votes.final_vote_count = Some(report.votes.vote_count);
        report.updated_at = at;
        if !report.status.can_transition_to(ReportStatus::InProgress) {
            return Ok(None);
        }
        report.status = ReportStatus::InProgress;
        Ok(report.votes.final_vote_count)
    }
    fn escalate_pending_reports(
        &self,
        created_before: Timestamp,
        at: Timestamp,
    ) -> RepoResult<Vec<Id>> {
        let mut ids = vec![];
        for report in self.reports.borrow_mut().iter_mut() {
            if report.status == ReportStatus::Pending && report.created_at < created_before {
                report.status = ReportStatus::EligibleForDrive;
                report.updated_at = at;
                ids.push(report.id.clone());
            }
        }
        Ok(ids)
    }
    fn delete_report(&self, id: &Id) -> RepoResult<()> {
        match self.deleted("reports", remove_where(&mut self.reports.borrow_mut(), |r| &r.id == id)) {
            0 => Err(RepoError::NotFound),
            _ => Ok(()),
        }
    }
}

impl ReportVoteRepo for MockDb {
    fn create_report_vote(&self, vote: &ReportVote) -> RepoResult<()> {
        if self.has_voted_for_report(&vote.report_id, &vote.user_id)? {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.report_votes.borrow_mut(), vote.clone())
    }
    fn has_voted_for_report(&self, report_id: &Id, user_id: &Id) -> RepoResult<bool> {
        Ok(self
            .report_votes
            .borrow()
            .iter()
            .any(|v| &v.report_id == report_id && &v.user_id == user_id))
    }
    fn delete_report_votes_of_report(&self, report_id: &Id) -> RepoResult<usize> {
        let n = remove_where(&mut self.report_votes.borrow_mut(), |v| &v.report_id == report_id);
        Ok(self.deleted("report_votes", n))
    }
}

impl StatusLogRepo for MockDb {
    fn append_status_log(&self, log: &StatusLog) -> RepoResult<()> {
        create(&mut self.status_logs.borrow_mut(), log.clone())
    }
    fn list_status_logs(&self, report_id: &Id) -> RepoResult<Vec<StatusLog>> {
        Ok(self
            .status_logs
            .borrow()
            .iter()
            .filter(|l| &l.report_id == report_id)
            .cloned()
            .collect())
    }
    fn delete_status_logs_of_report(&self, report_id: &Id) -> RepoResult<usize> {
        let n = remove_where(&mut self.status_logs.borrow_mut(), |l| &l.report_id == report_id);
        Ok(self.deleted("status_logs", n))
    }
}

impl ResolutionRepo for MockDb {
    fn create_report_resolution(&self, resolution: &ReportResolution) -> RepoResult<()> {
        if self.try_get_report_resolution(&resolution.report_id)?.is_some() {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.resolutions.borrow_mut(), resolution.clone())
    }
    fn try_get_report_resolution(&self, report_id: &Id) -> RepoResult<Option<ReportResolution>> {
        Ok(self
            .resolutions
            .borrow()
            .iter()
            .find(|r| &r.report_id == report_id)
            .cloned())
    }
    fn delete_report_resolution_of_report(&self, report_id: &Id) -> RepoResult<usize> {
        let n = remove_where(&mut self.resolutions.borrow_mut(), |r| &r.report_id == report_id);
        Ok(self.deleted("report_resolutions", n))
    }
}

impl AuthorityRepo for MockDb {
    fn create_authority(&self, authority: &Authority) -> RepoResult<()> {
        create(&mut self.authorities.borrow_mut(), authority.clone())
    }
    fn get_authority(&self, id: &Id) -> RepoResult<Authority> {
        get(&self.authorities.borrow(), id.as_str())
    }
    fn list_authorities(
        &self,
        query: &AuthorityQuery,
        pagination: &Pagination,
    ) -> RepoResult<Vec<Authority>> {
        let authorities = self
            .authorities
            .borrow()
            .iter()
            .filter(|a| {
                query
                    .city
                    .as_ref()
                    .map_or(true, |c| a.city.eq_ignore_ascii_case(c))
            })
            .filter(|a| {
                query
                    .category
                    .as_ref()
                    .map_or(true, |c| a.category.eq_ignore_ascii_case(c))
            })
            .cloned()
            .collect();
        Ok(paginate(authorities, pagination))
    }
    fn find_same_authority(&self, authority: &Authority) -> RepoResult<Option<Authority>> {
        Ok(self
            .authorities
            .borrow()
            .iter()
            .find(|a| a.is_same_office(authority))
            .cloned())
    }
}

impl ReportAuthorityRepo for MockDb {
    fn create_report_authority(&self, contact: &ReportAuthority) -> RepoResult<()> {
        if self
            .try_get_report_authority(&contact.report_id, &contact.authority_id)?
            .is_some()
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.report_authorities.borrow_mut(), contact.clone())
    }
    fn try_get_report_authority(
        &self,
        report_id: &Id,
        authority_id: &Id,
    ) -> RepoResult<Option<ReportAuthority>> {
        Ok(self
            .report_authorities
            .borrow()
            .iter()
            .find(|c| &c.report_id == report_id && &c.authority_id == authority_id)
            .cloned())
    }
    fn update_report_authority_status(
        &self,
        id: &Id,
        status: ContactStatus,
        at: Timestamp,
    ) -> RepoResult<()> {
        let mut contacts = self.report_authorities.borrow_mut();
        let contact = contacts
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or(RepoError::NotFound)?;
        contact.status = status;
        contact.updated_at = at;
        Ok(())
    }
    fn list_report_authorities(&self, report_id: &Id) -> RepoResult<Vec<ReportAuthority>> {
        Ok(self
            .report_authorities
            .borrow()
            .iter()
            .filter(|c| &c.report_id == report_id)
            .cloned()
            .collect())
    }
    fn delete_report_authorities_of_report(&self, report_id: &Id) -> RepoResult<usize> {
        let n = remove_where(&mut self.report_authorities.borrow_mut(), |c| {
            &c.report_id == report_id
        });
        Ok(self.deleted("report_authorities", n))
    }
}

impl DriveRepo for MockDb {
    fn create_drive(&self, drive: &Drive) -> RepoResult<()> {
        create(&mut self.drives.borrow_mut(), drive.clone())
    }
    fn get_drive(&self, id: &Id) -> RepoResult<Drive> {
        get(&self.drives.borrow(), id.as_str())
    }
    fn list_drives(&self, query: &DriveQuery, pagination: &Pagination) -> RepoResult<Vec<Drive>> {
        let drives = self
            .drives
            .borrow()
            .iter()
            .filter(|d| query.status.map_or(true, |s| d.status == s))
            .filter(|d| query.organizer.as_ref().map_or(true, |id| &d.organizer == id))
            .cloned()
            .collect();
        Ok(paginate(drives, pagination))
    }
    fn set_drive_status(&self, id: &Id, status: DriveStatus, at: Timestamp) -> RepoResult<()> {
        let mut drives = self.drives.borrow_mut();
        let drive = drives
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or(RepoError::NotFound)?;
        drive.status = status;
        drive.updated_at = at;
        Ok(())
    }
    fn open_drive_voting(&self, id: &Id, window: &VotingWindow) -> RepoResult<bool> {
        let mut drives = self.drives.borrow_mut();
        let drive = drives
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or(RepoError::NotFound)?;
        if drive.votes.window.is_some() {
            return Ok(false);
        }
        drive.votes.window = Some(*window);
        Ok(true)
    }
    fn increment_drive_vote_count(&self, id: &Id) -> RepoResult<u32> {
        let mut drives = self.drives.borrow_mut();
        let drive = drives
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or(RepoError::NotFound)?;
        drive.votes.vote_count += 1;
        Ok(drive.votes.vote_count)
    }
    fn promote_drive_on_vote_threshold(
        &self,
        id: &Id,
        threshold: u32,
        at: Timestamp,
    ) -> RepoResult<Option<u32>> {
        let mut drives = self.drives.borrow_mut();
        let drive = drives
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or(RepoError::NotFound)?;
        if drive.votes.vote_count < threshold
            || drive.votes.final_vote_count.is_some()
            || drive.status != DriveStatus::Planned
        {
            return Ok(None);
        }
        drive.status = DriveStatus::Ongoing;
        drive.votes.final_vote_count = Some(drive.votes.vote_count);
        drive.updated_at = at;
        Ok(drive.votes.final_vote_count)
    }
    fn delete_drive(&self, id: &Id) -> RepoResult<()> {
        match self.deleted("drives", remove_where(&mut self.drives.borrow_mut(), |d| &d.id == id)) {
            0 => Err(RepoError::NotFound),
            _ => Ok(()),
        }
    }
    fn link_report_to_drive(&self, drive_id: &Id, report_id: &Id) -> RepoResult<()> {
        let mut links = self.drive_reports.borrow_mut();
        if links.iter().any(|(d, r)| d == drive_id && r == report_id) {
            return Err(RepoError::AlreadyExists);
        }
        links.push((drive_id.clone(), report_id.clone()));
        Ok(())
    }
    fn report_ids_of_drive(&self, drive_id: &Id) -> RepoResult<Vec<Id>> {
        Ok(self
            .drive_reports
            .borrow()
            .iter()
            .filter(|(d, _)| d == drive_id)
            .map(|(_, r)| r.clone())
            .collect())
    }
    fn drive_ids_of_report(&self, report_id: &Id) -> RepoResult<Vec<Id>> {
        Ok(self
            .drive_reports
            .borrow()
            .iter()
            .filter(|(_, r)| r == report_id)
            .map(|(d, _)| d.clone())
            .collect())
    }
    fn delete_drive_reports_of_drive(&self, drive_id: &Id) -> RepoResult<usize> {
        let n = remove_where(&mut self.drive_reports.borrow_mut(), |(d, _)| d == drive_id);
        Ok(self.deleted("drive_reports", n))
    }
    fn delete_drive_reports_of_report(&self, report_id: &Id) -> RepoResult<usize> {
        let n = remove_where(&mut self.drive_reports.borrow_mut(), |(_, r)| r == report_id);
        Ok(self.deleted("drive_reports", n))
    }
}

impl DriveVoteRepo for MockDb {
    fn create_drive_vote(&self, vote: &DriveVote) -> RepoResult<()> {
        if self.has_voted_for_drive(&vote.drive_id, &vote.user_id)? {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.drive_votes.borrow_mut(), vote.clone())
    }
    fn has_voted_for_drive(&self, drive_id: &Id, user_id: &Id) -> RepoResult<bool> {
        Ok(self
            .drive_votes
            .borrow()
            .iter()
            .any(|v| &v.drive_id == drive_id && &v.user_id == user_id))
    }
    fn delete_drive_votes_of_drive(&self, drive_id: &Id) -> RepoResult<usize> {
        let n = remove_where(&mut self.drive_votes.borrow_mut(), |v| &v.drive_id == drive_id);
        Ok(self.deleted("drive_votes", n))
    }
}

impl VolunteerRepo for MockDb {
    fn add_drive_volunteer(&self, volunteer: &DriveVolunteer) -> RepoResult<()> {
        let mut volunteers = self.volunteers.borrow_mut();
        if volunteers
            .iter()
            .any(|v| v.drive_id == volunteer.drive_id && v.user_id == volunteer.user_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        volunteers.push(volunteer.clone());
        Ok(())
    }
    fn remove_drive_volunteer(&self, drive_id: &Id, user_id: &Id) -> RepoResult<()> {
        match remove_where(&mut self.volunteers.borrow_mut(), |v| {
            &v.drive_id == drive_id && &v.user_id == user_id
        }) {
            0 => Err(RepoError::NotFound),
            _ => Ok(()),
        }
    }
    fn list_drive_volunteers(&self, drive_id: &Id) -> RepoResult<Vec<DriveVolunteer>> {
        Ok(self
            .volunteers
            .borrow()
            .iter()
            .filter(|v| &v.drive_id == drive_id)
            .cloned()
            .collect())
    }
    fn delete_drive_volunteers_of_drive(&self, drive_id: &Id) -> RepoResult<usize> {
        let n = remove_where(&mut self.volunteers.borrow_mut(), |v| &v.drive_id == drive_id);
        Ok(self.deleted("drive_volunteers", n))
    }
}

impl EnhancementRepo for MockDb {
    fn create_drive_enhancement(&self, enhancement: &DriveEnhancement) -> RepoResult<()> {
        create(&mut self.enhancements.borrow_mut(), enhancement.clone())
    }
    fn list_drive_enhancements(&self, drive_id: &Id) -> RepoResult<Vec<DriveEnhancement>> {
        Ok(self
            .enhancements
            .borrow()
            .iter()
            .filter(|e| &e.drive_id == drive_id)
            .cloned()
            .collect())
    }
    fn delete_drive_enhancements_of_drive(&self, drive_id: &Id) -> RepoResult<usize> {
        let n = remove_where(&mut self.enhancements.borrow_mut(), |e| &e.drive_id == drive_id);
        Ok(self.deleted("drive_enhancements", n))
    }
}

impl TaskRepo for MockDb {
    fn create_task(&self, task: &Task) -> RepoResult<()> {
        create(&mut self.tasks.borrow_mut(), task.clone())
    }
    fn get_task(&self, id: &Id) -> RepoResult<Task> {
        get(&self.tasks.borrow(), id.as_str())
    }
    fn update_task(&self, task: &Task) -> RepoResult<()> {
        update(&mut self.tasks.borrow_mut(), task)
    }
    fn list_tasks_of_drive(&self, drive_id: &Id) -> RepoResult<Vec<Task>> {
        Ok(self
            .tasks
            .borrow()
            .iter()
            .filter(|t| &t.drive_id == drive_id)
            .cloned()
            .collect())
    }
    fn delete_task(&self, id: &Id) -> RepoResult<()> {
        match remove_where(&mut self.tasks.borrow_mut(), |t| &t.id == id) {
            0 => Err(RepoError::NotFound),
            _ => Ok(()),
        }
    }
    fn delete_tasks_of_drive(&self, drive_id: &Id) -> RepoResult<usize> {
        let n = remove_where(&mut self.tasks.borrow_mut(), |t| &t.drive_id == drive_id);
        Ok(self.deleted("tasks", n))
    }
    fn detach_tasks_from_report(&self, report_id: &Id) -> RepoResult<usize> {
        let mut count = 0;
        for task in self.tasks.borrow_mut().iter_mut() {
            if task.report_id.as_ref() == Some(report_id) {
                task.report_id = None;
                count += 1;
            }
        }
        Ok(count)
    }
}

impl MonitoringRepo for MockDb {
    fn create_monitoring(&self, monitoring: &Monitoring) -> RepoResult<()> {
        create(&mut self.monitorings.borrow_mut(), monitoring.clone())
    }
    fn get_monitoring(&self, id: &Id) -> RepoResult<Monitoring> {
        get(&self.monitorings.borrow(), id.as_str())
    }
    fn complete_monitoring(&self, id: &Id, at: Timestamp) -> RepoResult<()> {
        let mut monitorings = self.monitorings.borrow_mut();
        let monitoring = monitorings
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or(RepoError::NotFound)?;
        monitoring.status = MonitoringStatus::Completed;
        monitoring.completed_at = Some(at);
        Ok(())
    }
    fn complete_active_monitorings_of_report(
        &self,
        report_id: &Id,
        at: Timestamp,
    ) -> RepoResult<usize> {
        let mut count = 0;
        for m in self.monitorings.borrow_mut().iter_mut() {
            if &m.report_id == report_id && m.status == MonitoringStatus::Active {
                m.status = MonitoringStatus::Completed;
                m.completed_at = Some(at);
                count += 1;
            }
        }
        Ok(count)
    }
    fn list_monitorings_of_report(&self, report_id: &Id) -> RepoResult<Vec<Monitoring>> {
        Ok(self
            .monitorings
            .borrow()
            .iter()
            .filter(|m| &m.report_id == report_id)
            .cloned()
            .collect())
    }
    fn delete_monitorings_of_report(&self, report_id: &Id) -> RepoResult<usize> {
        let n = remove_where(&mut self.monitorings.borrow_mut(), |m| &m.report_id == report_id);
        Ok(self.deleted("monitorings", n))
    }
    fn delete_monitorings_of_drive(&self, drive_id: &Id) -> RepoResult<usize> {
        let n = remove_where(&mut self.monitorings.borrow_mut(), |m| {
            m.drive_id.as_ref() == Some(drive_id)
        });
        Ok(self.deleted("monitorings", n))
    }
}

impl DiscussionRepo for MockDb {
    fn create_discussion(&self, discussion: &Discussion) -> RepoResult<()> {
        create(&mut self.discussions.borrow_mut(), discussion.clone())
    }
    fn list_discussions(
        &self,
        parent: &DiscussionParent,
        phase: Option<DiscussionPhase>,
    ) -> RepoResult<Vec<Discussion>> {
        Ok(self
            .discussions
            .borrow()
            .iter()
            .filter(|d| &d.parent == parent)
            .filter(|d| phase.map_or(true, |p| d.phase == p))
            .cloned()
            .collect())
    }
    fn delete_discussions_of_parent(&self, parent: &DiscussionParent) -> RepoResult<usize> {
        let n = remove_where(&mut self.discussions.borrow_mut(), |d| &d.parent == parent);
        Ok(self.deleted("discussions", n))
    }
}
