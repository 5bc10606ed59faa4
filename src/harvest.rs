//! Request catalog for the Harvest v2 API.
//!
//! Each supported operation is a [`Harvest`] variant. [`Harvest::render`]
//! turns a variant into a transport-neutral [`RequestDescriptor`] and
//! [`Harvest::sample_data`] returns the canonical response body for it.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::credentials::Credentials;
use crate::error::{HarvestError, HarvestResult};
use crate::fixtures;
use crate::models::TimeEntryRequest;
use crate::wire;

/// Hours logged by [`Harvest::submit_full_day`]. Pending product confirmation.
pub const DEFAULT_HOURS: u32 = 8;

const MAX_HOURS_PER_ENTRY: u32 = 24;
const PROJECT_ASSIGNMENTS_PATH: &str = "/v2/users/me/project_assignments";
const TIME_ENTRIES_PATH: &str = "/v2/time_entries";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
    /// Canonical response body for offline transports; never sent.
    pub sample: &'static [u8],
}

impl RequestDescriptor {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Harvest {
    ListCurrentUserProjectAssignments,
    ListCurrentUserProjectAssignmentsPage {
        page: u32,
    },
    SubmitTimeEntry {
        project_id: u64,
        task_id: u64,
        date: NaiveDate,
        hours: Decimal,
    },
}

impl Harvest {
    pub fn submit_full_day(project_id: u64, task_id: u64, date: NaiveDate) -> Self {
        Harvest::SubmitTimeEntry {
            project_id,
            task_id,
            date,
            hours: Decimal::from(DEFAULT_HOURS),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Harvest::ListCurrentUserProjectAssignments
            | Harvest::ListCurrentUserProjectAssignmentsPage { .. } => Method::Get,
            Harvest::SubmitTimeEntry { .. } => Method::Post,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Harvest::ListCurrentUserProjectAssignments => PROJECT_ASSIGNMENTS_PATH.to_string(),
            Harvest::ListCurrentUserProjectAssignmentsPage { page } => {
                format!("{PROJECT_ASSIGNMENTS_PATH}?page={page}")
            }
            Harvest::SubmitTimeEntry { .. } => TIME_ENTRIES_PATH.to_string(),
        }
    }

    /// Rejects parameters Harvest would refuse, before anything is sent.
    pub fn validate(&self) -> HarvestResult<()> {
        match self {
            Harvest::ListCurrentUserProjectAssignments => Ok(()),
            Harvest::ListCurrentUserProjectAssignmentsPage { page } => {
                if *page == 0 {
                    return Err(HarvestError::InvalidRequest(
                        "pages are numbered from 1".to_string(),
                    ));
                }
                Ok(())
            }
            Harvest::SubmitTimeEntry { hours, .. } => {
                if hours.is_sign_negative() && !hours.is_zero() {
                    return Err(HarvestError::InvalidRequest(format!(
                        "hours must not be negative, got {hours}"
                    )));
                }
                if !wire::is_exact_on_wire(hours) {
                    return Err(HarvestError::InvalidRequest(format!(
                        "hours {hours} are too precise to send"
                    )));
                }
                if *hours > Decimal::from(MAX_HOURS_PER_ENTRY) {
                    return Err(HarvestError::InvalidRequest(format!(
                        "hours must be at most {MAX_HOURS_PER_ENTRY}, got {hours}"
                    )));
                }
                Ok(())
            }
        }
    }

    pub fn body(&self) -> HarvestResult<Option<Vec<u8>>> {
        match self {
            Harvest::ListCurrentUserProjectAssignments
            | Harvest::ListCurrentUserProjectAssignmentsPage { .. } => Ok(None),
            Harvest::SubmitTimeEntry {
                project_id,
                task_id,
                date,
                hours,
            } => {
                let request = TimeEntryRequest {
                    project_id: *project_id,
                    task_id: *task_id,
                    spent_date: *date,
                    hours: *hours,
                };
                wire::encode(&request).map(Some)
            }
        }
    }

    pub fn headers(credentials: &Credentials, user_agent: &str) -> Vec<(String, String)> {
        vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", credentials.personal_access_token),
            ),
            ("Harvest-Account-Id".to_string(), credentials.account_id.clone()),
            ("User-Agent".to_string(), user_agent.to_string()),
        ]
    }

    pub fn render(&self, credentials: &Credentials, user_agent: &str) -> HarvestResult<RequestDescriptor> {
        self.validate()?;
        let descriptor = RequestDescriptor {
            method: self.method(),
            path: self.path(),
            headers: Self::headers(credentials, user_agent),
            body: self.body()?,
            sample: self.sample_data(),
        };
        log::debug!("Rendered {} {}", descriptor.method, descriptor.path);
        Ok(descriptor)
    }

    pub fn sample_data(&self) -> &'static [u8] {
        match self {
            Harvest::ListCurrentUserProjectAssignments
            | Harvest::ListCurrentUserProjectAssignmentsPage { .. } => {
                fixtures::PROJECT_ASSIGNMENTS.as_bytes()
            }
            Harvest::SubmitTimeEntry { .. } => fixtures::TIME_ENTRY.as_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProjectAssignmentsPage, TimeEntry};

    fn credentials() -> Credentials {
        Credentials::new("token-abc", "123456")
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2017, 3, 21).unwrap()
    }

    #[test]
    fn list_renders_plain_get() {
        let descriptor = Harvest::ListCurrentUserProjectAssignments
            .render(&credentials(), "timesheets-test")
            .unwrap();
        assert_eq!(descriptor.method, Method::Get);
        assert_eq!(descriptor.path, "/v2/users/me/project_assignments");
        assert!(descriptor.body.is_none());
    }

    #[test]
    fn page_renders_query() {
        let descriptor = Harvest::ListCurrentUserProjectAssignmentsPage { page: 3 }
            .render(&credentials(), "timesheets-test")
            .unwrap();
        assert_eq!(descriptor.path, "/v2/users/me/project_assignments?page=3");
    }

    #[test]
    fn page_zero_is_invalid() {
        let err = Harvest::ListCurrentUserProjectAssignmentsPage { page: 0 }
            .render(&credentials(), "timesheets-test")
            .unwrap_err();
        assert!(matches!(err, HarvestError::InvalidRequest(_)));
    }

    #[test]
    fn submit_renders_post_with_body() {
        let descriptor = Harvest::submit_full_day(14307913, 8083365, date())
            .render(&credentials(), "timesheets-test")
            .unwrap();
        assert_eq!(descriptor.method, Method::Post);
        assert_eq!(descriptor.path, "/v2/time_entries");

        let body: serde_json::Value =
            serde_json::from_slice(descriptor.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["project_id"], 14307913);
        assert_eq!(body["task_id"], 8083365);
        assert_eq!(body["spent_date"], "2017-03-21");
        assert_eq!(body["hours"].as_f64(), Some(8.0));
    }

    #[test]
    fn submit_uses_explicit_hours() {
        let descriptor = Harvest::SubmitTimeEntry {
            project_id: 1,
            task_id: 2,
            date: date(),
            hours: Decimal::new(35, 1),
        }
        .render(&credentials(), "timesheets-test")
        .unwrap();
        let body: TimeEntryRequest = wire::decode(descriptor.body.as_deref().unwrap()).unwrap();
        assert_eq!(body.hours, Decimal::new(35, 1));
    }

    #[test]
    fn over_precise_hours_are_invalid() {
        let err = Harvest::SubmitTimeEntry {
            project_id: 1,
            task_id: 2,
            date: date(),
            hours: "1.000000000000000000001".parse().unwrap(),
        }
        .render(&credentials(), "timesheets-test")
        .unwrap_err();
        assert!(matches!(err, HarvestError::InvalidRequest(_)));
    }

    #[test]
    fn descriptor_carries_variant_sample() {
        let variant = Harvest::ListCurrentUserProjectAssignmentsPage { page: 2 };
        let descriptor = variant.render(&credentials(), "timesheets-test").unwrap();
        assert_eq!(descriptor.sample, variant.sample_data());
    }

    #[test]
    fn zero_hours_are_allowed() {
        let variant = Harvest::SubmitTimeEntry {
            project_id: 1,
            task_id: 2,
            date: date(),
            hours: Decimal::ZERO,
        };
        assert!(variant.validate().is_ok());
    }

    #[test]
    fn out_of_range_hours_are_invalid() {
        for hours in [Decimal::new(-1, 0), Decimal::new(241, 1)] {
            let err = Harvest::SubmitTimeEntry {
                project_id: 1,
                task_id: 2,
                date: date(),
                hours,
            }
            .render(&credentials(), "timesheets-test")
            .unwrap_err();
            assert!(matches!(err, HarvestError::InvalidRequest(_)), "{hours}");
        }
    }

    #[test]
    fn every_variant_carries_auth_headers() {
        let variants = [
            Harvest::ListCurrentUserProjectAssignments,
            Harvest::ListCurrentUserProjectAssignmentsPage { page: 2 },
            Harvest::submit_full_day(1, 2, date()),
        ];
        for variant in variants {
            let descriptor = variant.render(&credentials(), "timesheets-test").unwrap();
            assert_eq!(descriptor.header("Authorization"), Some("Bearer token-abc"));
            assert_eq!(descriptor.header("harvest-account-id"), Some("123456"));
            assert_eq!(descriptor.header("User-Agent"), Some("timesheets-test"));
        }
    }

    #[test]
    fn sample_data_decodes() {
        let page: ProjectAssignmentsPage =
            wire::decode(Harvest::ListCurrentUserProjectAssignments.sample_data()).unwrap();
        assert_eq!(page.project_assignments.len(), 2);

        let entry: TimeEntry = wire::decode(Harvest::submit_full_day(1, 2, date()).sample_data()).unwrap();
        assert_eq!(entry.id, 636718192);
    }
}
