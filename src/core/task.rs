use std::fmt::{Display, Formatter};

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{prelude::*, quantity::energy::KilowattHours};

/// Load category of a household task.
#[derive(Debug, Serialize, Deserialize, clap::ValueEnum, enumset::EnumSetType)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// Light loads, such as lighting or a computer.
    Low,

    Medium,

    /// Heavy appliances, such as laundry or charging a car.
    High,
}

impl TaskKind {
    /// Highest slot usage at which a task of this kind is still recommended to run.
    ///
    /// `None` means that any slot is fine.
    pub const fn max_slot_usage(self) -> Option<KilowattHours> {
        match self {
            Self::Low => Some(KilowattHours(2.0)),
            Self::Medium => Some(KilowattHours(4.0)),
            Self::High => None,
        }
    }
}

impl Display for TaskKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
pub struct Task {
    #[builder(into)]
    pub name: String,

    #[serde(rename = "type")]
    pub kind: TaskKind,

    /// Energy the task needs.
    pub usage: KilowattHours,
}

impl Task {
    pub fn validate(&self) -> Result {
        ensure!(!self.name.trim().is_empty(), "task name is empty");
        ensure!(self.usage.is_non_negative(), "usage {} is negative", self.usage);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_slot_usage() {
        assert_eq!(TaskKind::Low.max_slot_usage(), Some(KilowattHours(2.0)));
        assert_eq!(TaskKind::Medium.max_slot_usage(), Some(KilowattHours(4.0)));
        assert_eq!(TaskKind::High.max_slot_usage(), None);
    }

    #[test]
    fn test_deserialize_kind() {
        let task: Task = toml::from_str(r#"name = "Lighting"
type = "low"
usage = 1.0"#)
        .unwrap();
        assert_eq!(task.kind, TaskKind::Low);
        assert_eq!(task.usage, KilowattHours(1.0));
    }

    #[test]
    fn test_validate() {
        let task = Task::builder().name(" ").kind(TaskKind::Low).usage(KilowattHours(1.0)).build();
        assert!(task.validate().is_err());
    }
}
