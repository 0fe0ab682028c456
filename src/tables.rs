use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{
    auth::User,
    core::{
        allocation::Allocation,
        band::EfficiencyBand,
        ledger::Ledger,
        recommendation::Recommendation,
        slot::TimeSlot,
        summary::Summary,
        task::{Task, TaskKind},
    },
    quantity::energy::KilowattHours,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

const fn kind_color(kind: TaskKind) -> Color {
    match kind {
        TaskKind::Low => Color::Green,
        TaskKind::Medium => Color::DarkYellow,
        TaskKind::High => Color::Red,
    }
}

pub fn build_slots_table(slots: &[TimeSlot]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Time", "Usage", "Cost", "Solar", "Efficiency", "Capacity"]);
    for slot in slots {
        table.add_row(vec![
            Cell::new(slot.time),
            Cell::new(slot.usage).set_alignment(CellAlignment::Right),
            Cell::new(slot.cost).set_alignment(CellAlignment::Right),
            Cell::new(slot.solar).set_alignment(CellAlignment::Right).fg(
                if slot.solar > KilowattHours::ZERO { Color::Green } else { Color::Reset },
            ),
            Cell::new(slot.efficiency)
                .set_alignment(CellAlignment::Right)
                .fg(EfficiencyBand::from(slot.efficiency).color()),
            Cell::new(slot.capacity).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_allocation_table(allocation: &Allocation) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Time", "Efficiency", "Tasks", "Load", "Spare"]);
    for assignment in &allocation.assignments {
        let tasks = assignment
            .tasks
            .iter()
            .map(|task| format!("{} ({})", task.name, task.usage))
            .join("\n");
        table.add_row(vec![
            Cell::new(assignment.slot_time()),
            Cell::new(assignment.slot.efficiency)
                .set_alignment(CellAlignment::Right)
                .fg(EfficiencyBand::from(assignment.slot.efficiency).color()),
            Cell::new(tasks),
            Cell::new(assignment.total_usage()).set_alignment(CellAlignment::Right),
            Cell::new(assignment.spare_capacity())
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_unassigned_table(tasks: &[&Task]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Unassigned task", "Type", "Usage"]);
    for task in tasks {
        table.add_row(vec![
            Cell::new(&task.name),
            Cell::new(task.kind).fg(kind_color(task.kind)),
            Cell::new(task.usage).set_alignment(CellAlignment::Right).fg(Color::Red),
        ]);
    }
    table
}

pub fn build_summary_table(summary: &Summary) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Total usage", "Total cost", "Average usage", "Total solar"]);
    table.add_row(vec![
        Cell::new(summary.total_usage).set_alignment(CellAlignment::Right),
        Cell::new(summary.total_cost).set_alignment(CellAlignment::Right),
        Cell::new(summary.average_usage).set_alignment(CellAlignment::Right),
        Cell::new(summary.total_solar).set_alignment(CellAlignment::Right).fg(Color::Green),
    ]);
    table
}

pub fn build_recommendations_table(recommendations: &[Recommendation]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Task", "Type", "Ideal time", "Cost", "Usage", "Solar"]);
    for recommendation in recommendations {
        let slot = recommendation.slot;
        table.add_row(vec![
            Cell::new(&recommendation.task.name),
            Cell::new(recommendation.task.kind).fg(kind_color(recommendation.task.kind)),
            Cell::new(slot.time),
            Cell::new(slot.cost).set_alignment(CellAlignment::Right),
            Cell::new(slot.usage).set_alignment(CellAlignment::Right),
            Cell::new(slot.solar).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_ledger_table(ledger: &Ledger) -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Time", "Scheduled task"]);
    for (index, entry) in ledger.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1).add_attribute(Attribute::Dim),
            Cell::new(&entry.time),
            Cell::new(&entry.task),
        ]);
    }
    table
}

pub fn build_user_table(user: &User) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Username", "Email"]);
    table.add_row(vec![Cell::new(&user.username), Cell::new(&user.email)]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::allocation::allocate, dataset::Dataset};

    #[test]
    fn test_allocation_table_lists_every_assigned_task() {
        let dataset = Dataset::default();
        let allocation = allocate(&dataset.tasks, &dataset.slots);
        let rendered = build_allocation_table(&allocation).to_string();
        for task in &dataset.tasks {
            assert!(rendered.contains(&task.name), "{} is missing", task.name);
        }
    }

    #[test]
    fn test_ledger_table() {
        let mut ledger = Ledger::default();
        ledger.schedule("12:00", "Laundry");
        let rendered = build_ledger_table(&ledger).to_string();
        assert!(rendered.contains("12:00"));
        assert!(rendered.contains("Laundry"));
    }
}
