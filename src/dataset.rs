use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    core::{
        slot::{SlotTime, TimeSlot},
        task::{Task, TaskKind},
    },
    prelude::*,
    quantity::{cost::Cost, efficiency::Efficiency, energy::KilowattHours},
};

/// Household time slots together with the task catalog.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub slots: Vec<TimeSlot>,

    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Dataset {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        info!("reading the dataset…");
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let dataset: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        dataset.validate()?;
        info!(n_slots = dataset.slots.len(), n_tasks = dataset.tasks.len(), "loaded");
        Ok(dataset)
    }

    pub fn validate(&self) -> Result {
        for slot in &self.slots {
            slot.validate().with_context(|| format!("invalid slot `{}`", slot.time))?;
        }
        for task in &self.tasks {
            task.validate().with_context(|| format!("invalid task `{}`", task.name))?;
        }
        Ok(())
    }

    /// Keep only the tasks of the given kinds.
    pub fn retain_kinds(&mut self, kinds: enumset::EnumSet<TaskKind>) {
        self.tasks.retain(|task| kinds.contains(task.kind));
    }
}

impl Default for Dataset {
    /// Two-hourly demo day.
    fn default() -> Self {
        let slots = [
            (0, 2.0, 0.24, 0.0, 0.2, 5.0),
            (2, 1.5, 0.18, 0.0, 0.3, 5.0),
            (4, 1.0, 0.12, 0.0, 0.4, 5.0),
            (6, 3.0, 0.45, 0.5, 0.5, 6.0),
            (8, 4.0, 0.60, 1.5, 0.6, 6.0),
            (10, 5.0, 0.75, 2.5, 0.7, 7.0),
            (12, 4.0, 0.60, 3.0, 0.8, 7.0),
            (14, 4.5, 0.68, 2.5, 0.75, 7.0),
            (16, 5.0, 0.75, 2.0, 0.7, 6.0),
            (18, 6.0, 1.20, 1.0, 0.5, 6.0),
            (20, 4.0, 0.80, 0.2, 0.4, 5.0),
            (22, 3.5, 0.53, 0.0, 0.3, 5.0),
        ]
        .into_iter()
        .map(|(hour, usage, cost, solar, efficiency, capacity)| TimeSlot {
            time: SlotTime::on_hour(hour),
            usage: KilowattHours(usage),
            cost: Cost(cost),
            solar: KilowattHours(solar),
            efficiency: Efficiency(efficiency),
            capacity: KilowattHours(capacity),
        })
        .collect();

        let tasks = [
            ("Laundry", TaskKind::High, 4.0),
            ("Dishwasher", TaskKind::Medium, 3.0),
            ("Charging Electric Vehicle", TaskKind::High, 5.0),
            ("Computer Work", TaskKind::Low, 1.0),
            ("Cooking", TaskKind::Medium, 3.0),
            ("Air Conditioning", TaskKind::High, 4.0),
            ("Water Heater", TaskKind::Medium, 3.0),
            ("Home Entertainment", TaskKind::Low, 2.0),
            ("Lighting", TaskKind::Low, 1.0),
            ("Pool Pump", TaskKind::Medium, 3.0),
        ]
        .into_iter()
        .map(|(name, kind, usage)| Task { name: name.to_string(), kind, usage: KilowattHours(usage) })
        .collect();

        Self { slots, tasks }
    }
}
