use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Oldest entries are dropped beyond this.
pub const MAX_EVENTS: usize = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEvent {
    pub kind: String,
    pub message: String,
    pub user: String,
    pub at: DateTime<Local>,
}

impl ActivityEvent {
    /// One-line rendering used by the history page.
    pub fn summary(&self) -> String {
        format!("{} {}: {}", self.at.format("%Y-%m-%d %H:%M"), self.user, self.message)
    }
}

/// In-memory record of what the user did this session.
#[derive(Debug, Default)]
pub struct ActivityLog {
    events: VecDeque<ActivityEvent>,
    /// Events ever pushed; keeps counting past the cap and across `clear`.
    recorded_total: u64,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: &str, message: impl Into<String>, user: &str) {
        self.push(ActivityEvent {
            kind: kind.to_string(),
            message: message.into(),
            user: user.to_string(),
            at: Local::now(),
        });
    }

    pub fn push(&mut self, event: ActivityEvent) {
        self.events.push_back(event);
        self.recorded_total += 1;
        while self.events.len() > MAX_EVENTS {
            self.events.pop_front();
        }
    }

    /// Newest first.
    pub fn recent(&self) -> Vec<ActivityEvent> {
        // Reverse first so the stable sort keeps later pushes ahead on equal timestamps
        let mut events: Vec<ActivityEvent> = self.events.iter().rev().cloned().collect();
        events.sort_by(|a, b| b.at.cmp(&a.at));
        events
    }

    pub fn recorded_total(&self) -> u64 {
        self.recorded_total
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
