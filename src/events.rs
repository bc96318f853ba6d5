use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{FormField, MortgageType, SubmissionId};

/// all events that can be emitted by the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormEvent {
    FieldChanged {
        field: FormField,
        timestamp: DateTime<Utc>,
    },
    SubmissionRejected {
        submission_id: SubmissionId,
        invalid_fields: Vec<FormField>,
        timestamp: DateTime<Utc>,
    },
    RepaymentCalculated {
        submission_id: SubmissionId,
        monthly_payment: Money,
        total_payment: Money,
        timestamp: DateTime<Utc>,
    },
    UnsupportedTypeRequested {
        submission_id: SubmissionId,
        mortgage_type: MortgageType,
        timestamp: DateTime<Utc>,
    },
    CalculationFailed {
        submission_id: SubmissionId,
        message: String,
        timestamp: DateTime<Utc>,
    },
    FormCleared {
        timestamp: DateTime<Utc>,
    },
}

impl FormEvent {
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            FormEvent::FieldChanged { timestamp, .. }
            | FormEvent::SubmissionRejected { timestamp, .. }
            | FormEvent::RepaymentCalculated { timestamp, .. }
            | FormEvent::UnsupportedTypeRequested { timestamp, .. }
            | FormEvent::CalculationFailed { timestamp, .. }
            | FormEvent::FormCleared { timestamp } => *timestamp,
        }
    }

    pub fn submission_id(&self) -> Option<SubmissionId> {
        match self {
            FormEvent::SubmissionRejected { submission_id, .. }
            | FormEvent::RepaymentCalculated { submission_id, .. }
            | FormEvent::UnsupportedTypeRequested { submission_id, .. }
            | FormEvent::CalculationFailed { submission_id, .. } => Some(*submission_id),
            FormEvent::FieldChanged { .. } | FormEvent::FormCleared { .. } => None,
        }
    }
}

/// event store for collecting events during form operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<FormEvent>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: FormEvent) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<FormEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[FormEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&FormEvent> {
        self.events.last()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_log::test;
    use uuid::Uuid;

    #[test]
    fn test_event_store() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let id = Uuid::new_v4();
        let mut store = EventStore::new();

        store.emit(FormEvent::FieldChanged {
            field: FormField::Amount,
            timestamp: now,
        });
        store.emit(FormEvent::SubmissionRejected {
            submission_id: id,
            invalid_fields: vec![FormField::Term],
            timestamp: now,
        });

        assert_eq!(store.events().len(), 2);
        assert_eq!(store.last().and_then(FormEvent::submission_id), Some(id));
        assert_eq!(store.events()[0].timestamp(), now);

        let taken = store.take_events();
        assert_eq!(taken.len(), 2);
        assert!(store.events().is_empty());
    }
}
