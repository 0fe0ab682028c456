use crate::{
    core::slot::TimeSlot,
    quantity::{cost::Cost, energy::KilowattHours},
};

/// Day totals shown at the top of the dashboard.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Summary {
    pub total_usage: KilowattHours,
    pub total_cost: Cost,
    pub total_solar: KilowattHours,

    /// Average usage per slot.
    pub average_usage: KilowattHours,
}

impl<'a> FromIterator<&'a TimeSlot> for Summary {
    fn from_iter<T: IntoIterator<Item = &'a TimeSlot>>(iterator: T) -> Self {
        let mut n_slots = 0_u32;
        let mut total_usage = KilowattHours::ZERO;
        let mut total_cost = Cost::ZERO;
        let mut total_solar = KilowattHours::ZERO;
        for slot in iterator {
            n_slots += 1;
            total_usage += slot.usage;
            total_cost += slot.cost;
            total_solar += slot.solar;
        }
        Self {
            total_usage,
            total_cost,
            total_solar,
            average_usage: total_usage / f64::from(n_slots.max(1)),
        }
    }
}
