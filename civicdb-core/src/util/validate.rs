use civicdb_entities::{
    authority::ContactChannel, drive::Drive, location::Location, report::Report,
    url::Url,
};
use thiserror::Error;

pub use fast_chemail::is_valid_email;

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 10_000;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

pub fn is_valid_title(title: &str) -> bool {
    let title = title.trim();
    !title.is_empty() && title.chars().count() <= MAX_TITLE_LEN
}

pub fn is_valid_url(url: &str) -> bool {
    url.parse::<Url>().is_ok()
}

/// Trims the text and maps blank strings to `None`.
pub fn non_empty(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

#[derive(Debug, Error)]
pub enum ReportInvalidation {
    #[error("Invalid title")]
    Title,
    #[error("Invalid description")]
    Description,
    #[error(transparent)]
    Location(LocationInvalidation),
    #[error("Invalid media URL")]
    MediaUrl,
}

impl Validate for Report {
    type Error = ReportInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_title(&self.title) {
            return Err(Self::Error::Title);
        }
        if self.description.trim().is_empty() || self.description.len() > MAX_DESCRIPTION_LEN {
            return Err(Self::Error::Description);
        }
        self.location
            .validate()
            .map_err(Self::Error::Location)?;
        if !self.media_urls.iter().all(|u| is_valid_url(u)) {
            return Err(Self::Error::MediaUrl);
        }
        Ok(())
    }
}

impl AutoCorrect for Report {
    fn auto_correct(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.description = self.description.trim().to_string();
        self.media_urls = self
            .media_urls
            .into_iter()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .collect();
        self.location = self.location.auto_correct();
        self
    }
}

#[derive(Debug, Error)]
pub enum DriveInvalidation {
    #[error("Invalid title")]
    Title,
    #[error("The participant target must be positive")]
    ParticipantTarget,
    #[error(transparent)]
    Location(LocationInvalidation),
}

impl Validate for Drive {
    type Error = DriveInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_title(&self.title) {
            return Err(Self::Error::Title);
        }
        if self.participant_target == 0 {
            return Err(Self::Error::ParticipantTarget);
        }
        self.location.validate().map_err(Self::Error::Location)
    }
}

impl AutoCorrect for Drive {
    fn auto_correct(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.description = self.description.trim().to_string();
        self.location = self.location.auto_correct();
        self
    }
}

#[derive(Debug, Error)]
pub enum LocationInvalidation {
    #[error("Invalid coordinates")]
    Coordinates,
}

impl Validate for Location {
    type Error = LocationInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !self.is_valid() {
            return Err(Self::Error::Coordinates);
        }
        Ok(())
    }
}

impl AutoCorrect for Location {
    fn auto_correct(mut self) -> Self {
        self.address = non_empty(self.address);
        self.city = non_empty(self.city);
        self
    }
}

#[derive(Debug, Error)]
pub enum ContactInvalidation {
    #[error("Invalid email")]
    Email,
    #[error("Missing contact")]
    Empty,
}

impl Validate for ContactChannel {
    type Error = ContactInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if let Some(email) = self.email() {
            if !is_valid_email(email.as_str()) {
                return Err(Self::Error::Email);
            }
        }
        if self.value().trim().is_empty() {
            return Err(Self::Error::Empty);
        }
        Ok(())
    }
}
