use crate::expertise::ExpertiseLevel;
use crate::session::SessionWithTags;

/// Selects the sessions for one tier on one day.
#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub expertise: ExpertiseLevel,

    /// The day label, compared verbatim (e.g. `June 26th`).
    pub event_date: String,
}

impl Filter {
    pub fn new(expertise: ExpertiseLevel, event_date: impl Into<String>) -> Self {
        Self {
            expertise,
            event_date: event_date.into(),
        }
    }

    /// Whether both the day and the tier match exactly.
    pub fn matches(&self, session: &SessionWithTags) -> bool {
        let fields = &session.item.additional_fields;

        fields.event_date == self.event_date && fields.expertise == self.expertise.label()
    }
}

/// Returns the matching sessions in their original order.
pub fn apply(filter: &Filter, sessions: &[SessionWithTags]) -> Vec<SessionWithTags> {
    sessions
        .iter()
        .filter(|s| filter.matches(s))
        .cloned()
        .collect()
}

/// Orders sessions by start time. Sessions starting together keep
/// their relative order. Expects `duration_start` to be filled in.
pub fn sort_by_start(sessions: &mut [SessionWithTags]) {
    sessions.sort_by(|a, b| {
        a.item
            .additional_fields
            .duration_start
            .cmp(&b.item.additional_fields.duration_start)
    });
}
