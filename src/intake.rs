//! Terminal intake: prompts for patient fields and validates the priority.

use std::io::{BufRead, Write};

use log::debug;

use crate::errors::{IntakeError, IntakeResult};
use crate::types::{Patient, Priority};

/// Name the operator types at the name prompt to finish intake.
const DONE_SENTINEL: &str = "done";

/// Rule printed between records and around the roster listing.
pub(crate) const SEPARATOR: &str =
    "-----------------------------------------------------------------";

/// Reads patient records from a line-based input stream.
///
/// Prompts are written to `output` and flushed before each read so they show
/// up ahead of the cursor on a real terminal.
pub struct Intake<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Intake<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read the next patient record.
    ///
    /// Returns `Ok(None)` when the operator types `done` at the name prompt
    /// or the stream ends there. A stream that ends anywhere later in the
    /// record is reported as [`IntakeError::UnexpectedEof`]. Invalid age and
    /// priority lines are re-prompted, never surfaced as errors.
    pub fn next_patient(&mut self) -> IntakeResult<Option<Patient>> {
        writeln!(self.output, "{SEPARATOR}")?;
        let name = match self.read_field("Enter patient name: ")? {
            Some(name) if name != DONE_SENTINEL => name,
            _ => return Ok(None),
        };
        let age = self.read_age()?;
        let symptoms = self.require_field("Enter patient symptoms: ")?;
        let contact = self.require_field("Enter patient contact information: ")?;
        let priority = self.read_priority()?;

        debug!(
            "[INTAKE] completed record name={name} priority={}",
            priority.level()
        );
        Ok(Some(Patient::new(name, age, symptoms, contact, priority)))
    }

    /// Prompt once and read one trimmed line; `None` on end of stream.
    fn read_field(&mut self, prompt: &str) -> IntakeResult<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like `read_field`, but the record is already underway: end of stream
    /// here is an error, not a quiet stop.
    fn require_field(&mut self, prompt: &str) -> IntakeResult<String> {
        self.read_field(prompt)?.ok_or(IntakeError::UnexpectedEof)
    }

    /// Re-prompt until the line parses as an unsigned age.
    fn read_age(&mut self) -> IntakeResult<u32> {
        loop {
            let line = self.require_field("Enter patient age: ")?;
            match line.parse::<u32>() {
                Ok(age) => return Ok(age),
                Err(_) => {
                    writeln!(self.output, "Invalid input. Please enter a valid age.")?;
                }
            }
        }
    }

    /// Re-prompt until the line is a priority level in 1..=3.
    fn read_priority(&mut self) -> IntakeResult<Priority> {
        loop {
            let line =
                self.require_field("Enter priority (1: Serious, 2: Medium, 3: General): ")?;
            match line.parse::<u8>().ok().and_then(Priority::from_level) {
                Some(priority) => return Ok(priority),
                None => {
                    writeln!(self.output, "Invalid input. Please enter a valid priority.")?;
                }
            }
        }
    }
}
