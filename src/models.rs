use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::wire;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Task {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Client {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct UserSummary {
    pub id: u64,
    pub name: String,
}

/// Project reference nested inside a time entry; Harvest omits the code there.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProjectSummary {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TaskAssignment {
    pub id: u64,
    pub task: Task,
    pub billable: bool,
    pub is_active: bool,
    #[serde(default, with = "wire::decimal_option", skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Decimal>,
    #[serde(with = "wire::created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "wire::updated_at")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProjectAssignment {
    pub id: u64,
    pub project: Project,
    pub client: Client,
    pub task_assignments: Vec<TaskAssignment>,
    pub is_active: bool,
    #[serde(default)]
    pub is_project_manager: bool,
    #[serde(default, with = "wire::decimal_option", skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Decimal>,
    #[serde(with = "wire::created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "wire::updated_at")]
    pub updated_at: DateTime<Utc>,
}

impl ProjectAssignment {
    pub fn active_task_assignments(&self) -> impl Iterator<Item = &TaskAssignment> {
        self.task_assignments.iter().filter(|assignment| assignment.is_active)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PageLinks {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
}

/// One page of `GET /v2/users/me/project_assignments`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProjectAssignmentsPage {
    pub project_assignments: Vec<ProjectAssignment>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_entries: Option<u32>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub next_page: Option<u32>,
    #[serde(default)]
    pub previous_page: Option<u32>,
    #[serde(default)]
    pub links: PageLinks,
}

/// Outbound body of `POST /v2/time_entries`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TimeEntryRequest {
    pub project_id: u64,
    pub task_id: u64,
    #[serde(with = "wire::spent_date")]
    pub spent_date: NaiveDate,
    #[serde(with = "wire::decimal")]
    pub hours: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TimeEntry {
    pub id: u64,
    #[serde(with = "wire::spent_date")]
    pub spent_date: NaiveDate,
    #[serde(with = "wire::decimal")]
    pub hours: Decimal,
    pub user: UserSummary,
    pub project: ProjectSummary,
    pub task: Task,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<Client>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub billable: bool,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default)]
    pub is_running: bool,
    #[serde(with = "wire::created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "wire::updated_at")]
    pub updated_at: DateTime<Utc>,
}
