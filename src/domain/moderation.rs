// src/domain/moderation.rs

use crate::domain::listing::{Category, Condition};
use crate::domain::submission::ValidSubmission;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Approved,
    Rejected,
}

impl Status {
    /// Owner-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Approved => "Active",
            Status::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub condition: Condition,
    pub size: Option<String>,
    pub brand: Option<String>,
    pub tags: Vec<String>,
    /// Assigned on review; `None` until then.
    pub points: Option<u32>,
    /// Image sources (remote URLs or `data:` URLs from uploads).
    pub images: Vec<String>,
    pub submitter: String,
    /// ISO date.
    pub submitted: String,
    pub status: Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: u32,
    pub title: String,
    pub poster: String,
    pub reason: String,
    pub count: u32,
}

impl Report {
    /// Priority grows with the number of people who flagged the listing.
    pub fn severity(&self) -> Severity {
        match self.count {
            0..=1 => Severity::Low,
            2 => Severity::Medium,
            _ => Severity::High,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ModerationError {
    #[error("no pending item with id {0}")]
    UnknownSubmission(u32),

    #[error("no report with id {0}")]
    UnknownReport(u32),
}

/// Headline numbers on the admin page.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub pending: usize,
    pub total_users: u32,
    pub reported: usize,
    pub growth: &'static str,
}

/// Submissions awaiting review and reported listings.
#[derive(Debug)]
pub struct ModerationQueue {
    submissions: Vec<Submission>,
    reports: Vec<Report>,
    next_id: u32,
}

impl ModerationQueue {
    pub fn new(submissions: Vec<Submission>, reports: Vec<Report>) -> Self {
        let next_id = submissions
            .iter()
            .map(|s| s.id)
            .chain(reports.iter().map(|r| r.id))
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            submissions,
            reports,
            next_id,
        }
    }

    /// Queue a new submission as pending and return its id.
    pub fn submit(
        &mut self,
        item: ValidSubmission,
        images: Vec<String>,
        submitter: &str,
        today: &str,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        self.submissions.push(Submission {
            id,
            title: item.title,
            description: item.description,
            category: item.category,
            condition: item.condition,
            size: item.size,
            brand: item.brand,
            tags: item.tags,
            points: None,
            images,
            submitter: submitter.to_string(),
            submitted: today.to_string(),
            status: Status::Pending,
        });

        id
    }

    pub fn pending(&self) -> impl Iterator<Item = &Submission> {
        self.submissions
            .iter()
            .filter(|s| s.status == Status::Pending)
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn get(&self, id: u32) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.id == id)
    }

    pub fn approve(&mut self, id: u32) -> Result<&Submission, ModerationError> {
        self.decide(id, Status::Approved)
    }

    pub fn reject(&mut self, id: u32) -> Result<&Submission, ModerationError> {
        self.decide(id, Status::Rejected)
    }

    fn decide(&mut self, id: u32, status: Status) -> Result<&Submission, ModerationError> {
        let submission = self
            .submissions
            .iter_mut()
            .find(|s| s.id == id && s.status == Status::Pending)
            .ok_or(ModerationError::UnknownSubmission(id))?;

        submission.status = status;
        Ok(submission)
    }

    pub fn remove_report(&mut self, id: u32) -> Result<Report, ModerationError> {
        let pos = self
            .reports
            .iter()
            .position(|r| r.id == id)
            .ok_or(ModerationError::UnknownReport(id))?;

        Ok(self.reports.remove(pos))
    }

    pub fn stats(&self, total_users: u32) -> Stats {
        Stats {
            pending: self.pending().count(),
            total_users,
            reported: self.reports.len(),
            growth: "+12%",
        }
    }
}
