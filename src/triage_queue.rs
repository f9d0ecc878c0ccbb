//! Priority-ordered intake queue with stable FIFO ordering per level.

use std::collections::VecDeque;

use log::debug;

use crate::errors::{QueueError, QueueResult};
use crate::types::Patient;

/// Ordered container of patients awaiting service.
///
/// The backing deque is kept sorted non-decreasing by priority at all times;
/// among equal priorities, arrival order is preserved.
pub struct TriageQueue {
    patients: VecDeque<Patient>,
}

impl TriageQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            patients: VecDeque::new(),
        }
    }

    /// True when no patients are waiting.
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Current number of waiting patients.
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    /// Insert a patient behind everyone at an equal or more urgent level.
    ///
    /// Scans from the front for the first strictly less urgent patient and
    /// inserts just before it, so arrival order within a level is preserved.
    /// Linear in queue length; always succeeds.
    pub fn enqueue(&mut self, patient: Patient) {
        let position = self
            .patients
            .iter()
            .position(|waiting| waiting.priority > patient.priority)
            .unwrap_or(self.patients.len());
        debug!(
            "[QUEUE] enqueue name={} priority={} position={position}",
            patient.name,
            patient.priority.level()
        );
        self.patients.insert(position, patient);
    }

    /// Remove and return the most urgent patient.
    ///
    /// Ownership of the record moves to the caller. Calling this on an empty
    /// queue is a precondition violation reported as [`QueueError::Empty`];
    /// the queue is left untouched.
    pub fn dequeue(&mut self) -> QueueResult<Patient> {
        let patient = self.patients.pop_front().ok_or(QueueError::Empty)?;
        debug!(
            "[QUEUE] dequeue name={} priority={} remaining={}",
            patient.name,
            patient.priority.level(),
            self.patients.len()
        );
        Ok(patient)
    }

    /// Front-to-back view of the waiting patients without removing any.
    pub fn iter(&self) -> impl Iterator<Item = &Patient> {
        self.patients.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;
    use proptest::prelude::*;

    fn patient(name: &str, priority: Priority) -> Patient {
        Patient::new(name, 40, "unspecified", "none", priority)
    }

    fn is_sorted_by_priority(queue: &TriageQueue) -> bool {
        queue
            .iter()
            .zip(queue.iter().skip(1))
            .all(|(front, back)| front.priority <= back.priority)
    }

    #[test]
    fn freshly_created_queue_is_empty() {
        let queue = TriageQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn queue_stays_sorted_after_every_enqueue() {
        let mut queue = TriageQueue::new();
        let arrivals = [
            Priority::General,
            Priority::Serious,
            Priority::Medium,
            Priority::Serious,
            Priority::General,
            Priority::Medium,
        ];
        for (index, priority) in arrivals.into_iter().enumerate() {
            queue.enqueue(patient(&format!("p{index}"), priority));
            assert!(is_sorted_by_priority(&queue));
        }
        assert_eq!(queue.len(), arrivals.len());
    }

    #[test]
    fn ties_are_broken_by_arrival_order() {
        let mut queue = TriageQueue::new();
        queue.enqueue(patient("Alice", Priority::Serious));
        queue.enqueue(patient("Bob", Priority::Medium));
        queue.enqueue(patient("Carol", Priority::Serious));
        queue.enqueue(patient("Dave", Priority::General));

        let listed: Vec<&str> = queue.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(listed, ["Alice", "Carol", "Bob", "Dave"]);

        for expected in ["Alice", "Carol", "Bob", "Dave"] {
            let served = queue.dequeue().expect("queue has patients");
            assert_eq!(served.name, expected);
        }
        assert_eq!(queue.dequeue(), Err(QueueError::Empty));
    }

    #[test]
    fn dequeue_on_empty_queue_reports_error_without_mutation() {
        let mut queue = TriageQueue::new();
        assert_eq!(queue.dequeue(), Err(QueueError::Empty));
        assert!(queue.is_empty());

        // A failed dequeue must not corrupt later operation.
        queue.enqueue(patient("Eve", Priority::Medium));
        assert_eq!(queue.len(), 1);
        let served = queue.dequeue().expect("queue has one patient");
        assert_eq!(served.name, "Eve");
        assert_eq!(queue.dequeue(), Err(QueueError::Empty));
        assert!(queue.is_empty());
    }

    #[test]
    fn draining_empties_the_queue() {
        let mut queue = TriageQueue::new();
        let total = 12;
        for index in 0..total {
            let priority = Priority::from_level((index % 3) as u8 + 1).expect("level in range");
            queue.enqueue(patient(&format!("p{index}"), priority));
        }

        let mut served = 0;
        while !queue.is_empty() {
            queue.dequeue().expect("queue reported non-empty");
            served += 1;
        }
        assert_eq!(served, total);
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.dequeue(), Err(QueueError::Empty));
    }

    #[test]
    fn enumeration_does_not_consume_patients() {
        let mut queue = TriageQueue::new();
        queue.enqueue(patient("Alice", Priority::Medium));
        queue.enqueue(patient("Bob", Priority::Serious));
        queue.enqueue(patient("Carol", Priority::General));

        let first_pass: Vec<Patient> = queue.iter().cloned().collect();
        let second_pass: Vec<Patient> = queue.iter().cloned().collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(queue.len(), first_pass.len());

        // Serving afterwards yields exactly the enumerated order.
        let mut drained = Vec::new();
        while let Ok(served) = queue.dequeue() {
            drained.push(served);
        }
        assert_eq!(drained, first_pass);
    }

    proptest! {
        #[test]
        fn enqueue_preserves_sort_order_for_any_arrivals(
            levels in proptest::collection::vec(1u8..=3, 0..64)
        ) {
            let mut queue = TriageQueue::new();
            for (index, level) in levels.iter().enumerate() {
                let priority = Priority::from_level(*level).expect("level in range");
                queue.enqueue(patient(&format!("p{index}"), priority));
                prop_assert!(is_sorted_by_priority(&queue));
            }
            prop_assert_eq!(queue.len(), levels.len());
        }

        #[test]
        fn draining_matches_a_stable_sort_by_priority(
            levels in proptest::collection::vec(1u8..=3, 0..64)
        ) {
            let mut queue = TriageQueue::new();
            for (index, level) in levels.iter().enumerate() {
                let priority = Priority::from_level(*level).expect("level in range");
                queue.enqueue(patient(&format!("p{index}"), priority));
            }

            // sort_by_key is stable, so arrival index breaks ties exactly
            // the way the queue must.
            let mut expected: Vec<(u8, String)> = levels
                .iter()
                .enumerate()
                .map(|(index, level)| (*level, format!("p{index}")))
                .collect();
            expected.sort_by_key(|&(level, _)| level);

            let mut served = Vec::new();
            while let Ok(next) = queue.dequeue() {
                served.push((next.priority.level(), next.name));
            }
            prop_assert_eq!(served, expected);
            prop_assert!(queue.is_empty());
        }
    }
}
