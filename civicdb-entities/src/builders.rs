pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{drive_builder::*, report_builder::*};

pub mod report_builder {

    use super::*;
    use crate::{id::*, location::*, report::*, time::*, voting::*};

    #[derive(Debug)]
    pub struct ReportBuild {
        report: Report,
    }

    impl ReportBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.report.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.report.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.report.description = desc.into();
            self
        }
        pub fn status(mut self, status: ReportStatus) -> Self {
            self.report.status = status;
            self
        }
        pub fn reporter(mut self, reporter: &str) -> Self {
            self.report.reporter = reporter.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.report.location.city = Some(city.into());
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.report.created_at = created_at;
            self.report.updated_at = created_at;
            self
        }
        pub fn votes(mut self, votes: VoteTally) -> Self {
            self.report.votes = votes;
            self
        }
        pub fn finish(self) -> Report {
            self.report
        }
    }

    impl Builder for Report {
        type Build = ReportBuild;
        fn build() -> ReportBuild {
            let now = Timestamp::now();
            ReportBuild {
                report: Report {
                    id: Id::new(),
                    title: "".into(),
                    description: "".into(),
                    status: ReportStatus::default(),
                    location: Location::default(),
                    media_urls: vec![],
                    reporter: Id::new(),
                    votes: VoteTally::default(),
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}

pub mod drive_builder {

    use super::*;
    use crate::{drive::*, id::*, location::*, time::*, voting::*};

    #[derive(Debug)]
    pub struct DriveBuild {
        drive: Drive,
    }

    impl DriveBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.drive.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.drive.title = title.into();
            self
        }
        pub fn status(mut self, status: DriveStatus) -> Self {
            self.drive.status = status;
            self
        }
        pub fn organizer(mut self, organizer: &str) -> Self {
            self.drive.organizer = organizer.into();
            self
        }
        pub fn participant_target(mut self, target: u32) -> Self {
            self.drive.participant_target = target;
            self
        }
        pub fn votes(mut self, votes: VoteTally) -> Self {
            self.drive.votes = votes;
            self
        }
        pub fn finish(self) -> Drive {
            self.drive
        }
    }

    impl Builder for Drive {
        type Build = DriveBuild;
        fn build() -> DriveBuild {
            let now = Timestamp::now();
            DriveBuild {
                drive: Drive {
                    id: Id::new(),
                    title: "".into(),
                    description: "".into(),
                    status: DriveStatus::default(),
                    organizer: Id::new(),
                    participant_target: 1,
                    date: None,
                    location: Location::default(),
                    votes: VoteTally::default(),
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}
