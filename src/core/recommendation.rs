use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::{
    core::{slot::TimeSlot, task::Task},
    prelude::*,
};

#[must_use]
#[derive(Debug)]
pub struct Recommendation<'a> {
    pub task: &'a Task,
    pub slot: &'a TimeSlot,
}

/// Suggest a slot for each task by net solar yield, one task per slot at most.
///
/// Tasks are served in catalog order. A task is only offered slots whose household usage stays
/// within its kind's threshold. When the best such slot is already taken, the task gets nothing.
#[instrument(skip_all, fields(n_tasks = tasks.len(), n_slots = slots.len()))]
pub fn recommend<'a>(tasks: &'a [Task], slots: &'a [TimeSlot]) -> Vec<Recommendation<'a>> {
    // Free slots have no yield and go last:
    let ranked = slots
        .iter()
        .sorted_by_key(|slot| Reverse(slot.net_solar_yield().map(OrderedFloat)))
        .collect_vec();

    let mut recommendations: Vec<Recommendation> = Vec::new();
    for task in tasks {
        let Some(slot) = ranked.iter().copied().find(|slot| {
            task.kind.max_slot_usage().is_none_or(|max_usage| slot.usage <= max_usage)
        }) else {
            debug!(name = %task.name, "no slot is light enough");
            continue;
        };
        if recommendations.iter().any(|recommendation| recommendation.slot.time == slot.time) {
            debug!(name = %task.name, time = %slot.time, "the slot is already recommended");
            continue;
        }
        recommendations.push(Recommendation { task, slot });
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{slot::SlotTime, task::TaskKind},
        quantity::{cost::Cost, efficiency::Efficiency, energy::KilowattHours},
    };

    fn slot(hour: u32, usage: f64, cost: f64, solar: f64) -> TimeSlot {
        TimeSlot::builder()
            .time(SlotTime::on_hour(hour))
            .usage(KilowattHours(usage))
            .cost(Cost(cost))
            .solar(KilowattHours(solar))
            .efficiency(Efficiency(0.5))
            .capacity(KilowattHours(5.0))
            .build()
    }

    fn task(name: &str, kind: TaskKind) -> Task {
        Task::builder().name(name).kind(kind).usage(KilowattHours(1.0)).build()
    }

    /// The slots of the simpler root dashboard.
    fn root_slots() -> Vec<TimeSlot> {
        vec![
            slot(0, 2.0, 0.24, 0.0),
            slot(3, 1.5, 0.15, 0.0),
            slot(6, 3.0, 0.45, 0.5),
            slot(9, 5.0, 0.75, 2.0),
            slot(12, 4.0, 0.60, 3.0),
            slot(15, 4.5, 0.68, 2.5),
            slot(18, 6.0, 1.20, 1.0),
            slot(21, 3.5, 0.53, 0.0),
        ]
    }

    #[test]
    fn test_root_dashboard() {
        let slots = root_slots();
        let tasks = [
            task("Laundry", TaskKind::High),
            task("Dishwasher", TaskKind::Medium),
            task("Charging Electric Vehicle", TaskKind::High),
            task("Computer Work", TaskKind::Low),
            task("Cooking", TaskKind::Medium),
        ];

        let recommendations = recommend(&tasks, &slots);

        let recommended = recommendations
            .iter()
            .map(|recommendation| {
                (recommendation.task.name.as_str(), recommendation.slot.time.to_string())
            })
            .collect_vec();
        assert_eq!(
            recommended,
            [("Laundry", "12:00".to_string()), ("Computer Work", "00:00".to_string())]
        );
    }

    #[test]
    fn test_free_slot_goes_last() {
        let slots = [slot(0, 1.0, 0.0, 5.0), slot(2, 1.0, 0.5, 0.0)];
        let tasks = [task("Lighting", TaskKind::Low)];

        let recommendations = recommend(&tasks, &slots);

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].slot.time, slots[1].time);
    }

    #[test]
    fn test_no_light_enough_slot() {
        let slots = [slot(0, 3.0, 0.5, 0.0)];
        let tasks = [task("Lighting", TaskKind::Low)];
        assert!(recommend(&tasks, &slots).is_empty());
    }
}
