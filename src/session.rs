//! Intake, roster display, and serve phases for one run of the triage desk.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use log::info;

use crate::intake::{Intake, SEPARATOR};
use crate::triage_queue::TriageQueue;
use crate::types::{Patient, Priority};

/// Counters reported in the end-of-run summary block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub admitted: usize,
    pub served: usize,
}

/// Run the interactive session against the process's stdin and stdout.
pub fn run_interactive() -> Result<SessionSummary> {
    run_session(io::stdin().lock(), io::stdout().lock())
}

/// Run the scripted demo roster against stdout.
pub fn run_demo() -> Result<SessionSummary> {
    run_demo_with(io::stdout().lock())
}

/// Full session flow: intake until the sentinel, list the roster, then serve
/// every patient in priority order and print the summary.
pub fn run_session<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<SessionSummary> {
    let mut queue = TriageQueue::new();

    writeln!(output, "Enter patient details (type 'done' as name to finish):")?;
    let mut admitted = 0;
    {
        let mut intake = Intake::new(&mut input, &mut output);
        while let Some(patient) = intake.next_patient()? {
            queue.enqueue(patient);
            admitted += 1;
        }
    }
    info!("[SESSION] intake closed admitted={admitted} waiting={}", queue.len());

    display_roster(&mut output, &queue)?;
    let served = serve_all(&mut output, &mut queue)?;
    let summary = SessionSummary { admitted, served };
    print_summary(&mut output, summary)?;
    info!("[SESSION] finished admitted={admitted} served={served}");
    Ok(summary)
}

/// Demo variant: a fixed roster instead of terminal intake, same display and
/// serve path. Deterministic output for scripted runs.
fn run_demo_with<W: Write>(mut output: W) -> Result<SessionSummary> {
    let mut queue = TriageQueue::new();
    let roster = demo_roster();
    let admitted = roster.len();
    for patient in roster {
        queue.enqueue(patient);
    }
    info!("[SESSION] demo roster admitted={admitted}");

    display_roster(&mut output, &queue)?;
    let served = serve_all(&mut output, &mut queue)?;
    let summary = SessionSummary { admitted, served };
    print_summary(&mut output, summary)?;
    Ok(summary)
}

/// Fixed demo patients: every level appears, and two serious arrivals pin
/// the arrival-order tie-break.
fn demo_roster() -> Vec<Patient> {
    vec![
        Patient::new(
            "Omar Haddad",
            61,
            "shortness of breath",
            "555-0142",
            Priority::Serious,
        ),
        Patient::new("June Park", 35, "sprained ankle", "555-0187", Priority::General),
        Patient::new("Ana Reyes", 47, "chest pain", "555-0109", Priority::Serious),
        Patient::new("Liam Doyle", 29, "migraine", "555-0168", Priority::Medium),
    ]
}

/// Print the waiting roster in service order without consuming it.
fn display_roster<W: Write>(output: &mut W, queue: &TriageQueue) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "Patients in the priority queue:")?;
    for patient in queue.iter() {
        writeln!(output, "{patient}")?;
    }
    writeln!(output, "{SEPARATOR}")?;
    Ok(())
}

/// Serve every waiting patient, most urgent first.
fn serve_all<W: Write>(output: &mut W, queue: &mut TriageQueue) -> Result<usize> {
    let mut served = 0;
    while !queue.is_empty() {
        let patient = queue.dequeue()?;
        writeln!(output, "Serving patient: {}", patient.name)?;
        served += 1;
    }
    Ok(served)
}

fn print_summary<W: Write>(output: &mut W, summary: SessionSummary) -> Result<()> {
    writeln!(output, "SESSION SUMMARY")?;
    writeln!(
        output,
        "admitted={} served={}",
        summary.admitted, summary.served
    )?;
    Ok(())
}
