use std::cmp::Reverse;

use bon::Builder;
use itertools::Itertools;

use crate::{
    core::{
        slot::{SlotTime, TimeSlot},
        task::Task,
    },
    prelude::*,
    quantity::energy::KilowattHours,
};

/// Tasks packed into a single slot.
#[must_use]
#[derive(Debug)]
pub struct Assignment<'a> {
    pub slot: &'a TimeSlot,

    /// In the order they were packed, that is descending usage.
    pub tasks: Vec<&'a Task>,
}

impl Assignment<'_> {
    pub const fn slot_time(&self) -> SlotTime {
        self.slot.time
    }

    pub fn total_usage(&self) -> KilowattHours {
        self.tasks.iter().map(|task| task.usage).sum()
    }

    pub fn spare_capacity(&self) -> KilowattHours {
        self.slot.capacity - self.total_usage()
    }
}

#[must_use]
#[derive(Debug, Default)]
pub struct Allocation<'a> {
    /// Slots that received at least one task, most efficient first.
    pub assignments: Vec<Assignment<'a>>,

    /// Tasks that did not fit any slot, in descending usage order.
    pub unassigned: Vec<&'a Task>,
}

impl Allocation<'_> {
    pub fn n_assigned_tasks(&self) -> usize {
        self.assignments.iter().map(|assignment| assignment.tasks.len()).sum()
    }
}

/// Greedy packing of household tasks into time slots.
///
/// The most efficient slot is filled first, and within a slot the heaviest task that still
/// fits is taken first. A task that fits nowhere is left unassigned.
#[derive(Builder)]
pub struct Allocator<'a> {
    tasks: &'a [Task],
    slots: &'a [TimeSlot],
}

impl<'a> Allocator<'a> {
    #[instrument(skip_all, fields(n_tasks = self.tasks.len(), n_slots = self.slots.len()))]
    pub fn allocate(self) -> Allocation<'a> {
        // Both sorts are stable, so ties keep their original order:
        let mut pending = self.tasks.iter().sorted_by_key(|task| Reverse(task.usage)).collect_vec();
        let slots = self.slots.iter().sorted_by_key(|slot| Reverse(slot.efficiency));

        let mut assignments = Vec::new();
        for slot in slots {
            if pending.is_empty() {
                break;
            }
            let mut remaining_capacity = slot.capacity;
            let mut tasks = Vec::new();
            pending.retain(|task| {
                if task.usage <= remaining_capacity {
                    remaining_capacity -= task.usage;
                    tasks.push(*task);
                    false
                } else {
                    true
                }
            });
            if !tasks.is_empty() {
                debug!(
                    time = %slot.time,
                    n_tasks = tasks.len(),
                    remaining_capacity = %remaining_capacity,
                    "packed the slot"
                );
                assignments.push(Assignment { slot, tasks });
            }
        }

        for task in &pending {
            warn!(name = %task.name, usage = %task.usage, "the task fits no slot");
        }
        info!(n_assignments = assignments.len(), n_unassigned = pending.len(), "allocated");
        Allocation { assignments, unassigned: pending }
    }
}

/// Shorthand for [`Allocator`].
pub fn allocate<'a>(tasks: &'a [Task], slots: &'a [TimeSlot]) -> Allocation<'a> {
    Allocator::builder().tasks(tasks).slots(slots).build().allocate()
}
