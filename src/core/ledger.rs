use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::prelude::*;

/// Task that the user put into a slot by hand.
///
/// Neither the time nor the task name are checked against the dataset.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScheduledTask {
    pub time: String,
    pub task: String,
}

impl FromStr for ScheduledTask {
    type Err = Error;

    /// Parse `TIME=TASK`.
    fn from_str(s: &str) -> Result<Self> {
        let (time, task) =
            s.split_once('=').with_context(|| format!("expected `TIME=TASK`, got `{s}`"))?;
        Ok(Self { time: time.trim().to_string(), task: task.trim().to_string() })
    }
}

impl Display for ScheduledTask {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.time, self.task)
    }
}

/// Manually scheduled tasks, kept for the current run only.
#[must_use]
#[derive(Clone, Debug, Default, derive_more::IntoIterator)]
pub struct Ledger(Vec<ScheduledTask>);

impl Ledger {
    pub fn schedule(&mut self, time: impl Into<String>, task: impl Into<String>) {
        let entry = ScheduledTask { time: time.into(), task: task.into() };
        debug!(%entry, "scheduled manually");
        self.0.push(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduledTask> {
        self.0.iter()
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ScheduledTask> for Ledger {
    fn from_iter<T: IntoIterator<Item = ScheduledTask>>(iterator: T) -> Self {
        let mut ledger = Self::default();
        for entry in iterator {
            ledger.schedule(entry.time, entry.task);
        }
        ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let entry: ScheduledTask = "12:00 = Laundry".parse().unwrap();
        assert_eq!(entry, ScheduledTask { time: "12:00".into(), task: "Laundry".into() });
    }

    #[test]
    fn test_parse_keeps_unknown_values() {
        let entry: ScheduledTask = "whenever=Sauna=hot".parse().unwrap();
        assert_eq!(entry.time, "whenever");
        assert_eq!(entry.task, "Sauna=hot");
    }

    #[test]
    fn test_parse_missing_separator() {
        assert!("12:00 Laundry".parse::<ScheduledTask>().is_err());
    }

    #[test]
    fn test_schedule_appends_duplicates() {
        let mut ledger = Ledger::default();
        ledger.schedule("12:00", "Laundry");
        ledger.schedule("12:00", "Laundry");
        assert_eq!(ledger.len(), 2);
        assert!(ledger.iter().all(|entry| entry.task == "Laundry"));
    }
}
