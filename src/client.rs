use chrono::NaiveDate;
use log::{error, info, warn};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use crate::credentials::{Credentials, Settings, default_user_agent};
use crate::error::{HarvestError, HarvestResult, TransportError};
use crate::harvest::Harvest;
use crate::models::{ProjectAssignment, ProjectAssignmentsPage, TimeEntry};
use crate::transport::Transport;
use crate::wire;

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Typed access to the Harvest operations, on top of any [`Transport`].
pub struct HarvestClient<T> {
    credentials: Credentials,
    user_agent: String,
    transport: T,
}

impl<T: Transport> HarvestClient<T> {
    pub fn new(credentials: Credentials, transport: T) -> Self {
        Self {
            credentials,
            user_agent: default_user_agent(),
            transport,
        }
    }

    pub fn with_settings(credentials: Credentials, settings: &Settings, transport: T) -> Self {
        Self {
            credentials,
            user_agent: settings.user_agent.clone(),
            transport,
        }
    }

    /// All project assignments of the current user, following `next_page`.
    pub fn list_project_assignments(&self) -> HarvestResult<Vec<ProjectAssignment>> {
        let mut page: ProjectAssignmentsPage = self.send(&Harvest::ListCurrentUserProjectAssignments)?;
        let mut assignments = std::mem::take(&mut page.project_assignments);
        // The unparameterised request is page 1.
        let mut requested = 1;

        while let Some(next) = page.next_page {
            let current = page.page.map_or(requested, |echoed| echoed.max(requested));
            if next <= current {
                warn!("Ignoring non-advancing next_page {next} after page {current}");
                break;
            }
            requested = next;
            page = self.send(&Harvest::ListCurrentUserProjectAssignmentsPage { page: next })?;
            assignments.append(&mut page.project_assignments);
        }

        info!("Loaded {} project assignments", assignments.len());
        Ok(assignments)
    }

    pub fn submit_time_entry(
        &self,
        project_id: u64,
        task_id: u64,
        date: NaiveDate,
        hours: Decimal,
    ) -> HarvestResult<TimeEntry> {
        let entry: TimeEntry = self.send(&Harvest::SubmitTimeEntry {
            project_id,
            task_id,
            date,
            hours,
        })?;
        info!(
            "Submitted time entry {} for {} ({} hours)",
            entry.id,
            wire::format_bare_date(&entry.spent_date),
            entry.hours
        );
        Ok(entry)
    }

    /// Submits one entry per date, in order, stopping at the first failure.
    /// `progress` receives the completed fraction after each entry.
    pub fn submit_timesheet<F>(
        &self,
        project_id: u64,
        task_id: u64,
        dates: &[NaiveDate],
        hours: Decimal,
        mut progress: F,
    ) -> HarvestResult<Vec<TimeEntry>>
    where
        F: FnMut(f32),
    {
        if dates.is_empty() {
            return Err(HarvestError::InvalidRequest(
                "a timesheet needs at least one day".to_string(),
            ));
        }

        // Validate every day up front so nothing is sent for a bad sheet.
        let requests = dates
            .iter()
            .map(|date| {
                let variant = Harvest::SubmitTimeEntry {
                    project_id,
                    task_id,
                    date: *date,
                    hours,
                };
                variant.validate().map(|_| variant)
            })
            .collect::<HarvestResult<Vec<_>>>()?;

        let mut entries = Vec::with_capacity(requests.len());
        for (index, variant) in requests.iter().enumerate() {
            let entry: TimeEntry = self.send(variant)?;
            entries.push(entry);
            progress((index + 1) as f32 / requests.len() as f32);
        }
        info!("Submitted timesheet with {} entries", entries.len());
        Ok(entries)
    }

    fn send<R: DeserializeOwned>(&self, variant: &Harvest) -> HarvestResult<R> {
        let descriptor = variant.render(&self.credentials, &self.user_agent)?;
        let response = self.transport.execute(&descriptor).inspect_err(|err| {
            warn!("{} {} failed: {err}", descriptor.method, descriptor.path);
        })?;

        if !response.is_success() {
            let err = TransportError::Status {
                status: response.status,
                message: error_message(&response.body),
            };
            warn!("{} {} failed: {err}", descriptor.method, descriptor.path);
            return Err(err.into());
        }

        wire::decode(&response.body).map_err(|err| {
            error!(
                "Response to {} {} does not match schema: {err}",
                descriptor.method, descriptor.path
            );
            HarvestError::from(err)
        })
    }
}

fn error_message(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let message = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .or_else(|| value.get("error_description"))
                .or_else(|| value.get("error"))
                .and_then(|field| field.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| text.trim().to_string());
    message.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
