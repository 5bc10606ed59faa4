use std::error::Error;
use std::io::Write;

use clap::Parser;
use harvest_timesheets::credentials::{self, Credentials, Settings};
use harvest_timesheets::models::{ProjectAssignment, TimeEntry};
use harvest_timesheets::timesheet::{dates_in_week, describe_days};
use harvest_timesheets::transport::{FixtureTransport, HttpTransport, Transport};
use harvest_timesheets::{HarvestClient, wire};

mod cli;
mod logger;

use cli::{Cli, Command};

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logger::initialize(logger::level_filter(cli.verbose))?;

    let settings = Settings::from_env();
    if cli.offline {
        let client = HarvestClient::with_settings(
            Credentials::new("offline", "offline"),
            &settings,
            FixtureTransport,
        );
        return run(&client, cli.command);
    }

    let credentials = credentials::load_credentials().inspect_err(|err| {
        log::error!("{err}");
    })?;
    let transport = HttpTransport::new(&settings)?;
    let client = HarvestClient::with_settings(credentials, &settings, transport);
    run(&client, cli.command)
}

fn run<T: Transport>(client: &HarvestClient<T>, command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Projects { all } => {
            let assignments = client.list_project_assignments()?;
            print_assignments(&assignments, all);
        }
        Command::Submit {
            project_id,
            task_id,
            date,
            hours,
        } => {
            let date = date.unwrap_or_else(cli::today);
            let entry = client.submit_time_entry(project_id, task_id, date, hours)?;
            print_entry(&entry);
        }
        Command::Timesheet {
            project_id,
            task_id,
            week,
            days,
            hours,
        } => {
            let dates = dates_in_week(week.unwrap_or_else(cli::today), &days);
            println!("Submitting timesheet ({})", describe_days(&days));
            let entries = client.submit_timesheet(project_id, task_id, &dates, hours, |fraction| {
                print!("\r{:>3.0}%", fraction * 100.0);
                let _ = std::io::stdout().flush();
            })?;
            println!();
            for entry in &entries {
                print_entry(entry);
            }
        }
    }
    Ok(())
}

fn print_assignments(assignments: &[ProjectAssignment], all: bool) {
    for assignment in assignments {
        let marker = if assignment.is_active { "" } else { " (inactive)" };
        println!(
            "{} [{}] {} - {}{}",
            assignment.project.id,
            assignment.project.code,
            assignment.project.name,
            assignment.client.name,
            marker
        );
        for task_assignment in &assignment.task_assignments {
            if !all && !task_assignment.is_active {
                continue;
            }
            let billable = if task_assignment.billable {
                ""
            } else {
                " (non-billable)"
            };
            println!(
                "    {} {}{}",
                task_assignment.task.id, task_assignment.task.name, billable
            );
        }
    }
}

fn print_entry(entry: &TimeEntry) {
    println!(
        "#{} {} {}h {} / {}",
        entry.id,
        wire::format_bare_date(&entry.spent_date),
        entry.hours,
        entry.project.name,
        entry.task.name
    );
}
