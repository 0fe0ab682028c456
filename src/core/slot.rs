use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use bon::Builder;
use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::{
    prelude::*,
    quantity::{cost::Cost, efficiency::Efficiency, energy::KilowattHours},
};

/// Time-of-day label of a slot, written as `HH:MM`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, derive_more::From)]
pub struct SlotTime(pub NaiveTime);

impl SlotTime {
    const FORMAT: &'static str = "%H:%M";

    /// Start of the given hour, wrapping around midnight.
    pub fn on_hour(hour: u32) -> Self {
        Self(NaiveTime::MIN + TimeDelta::hours(i64::from(hour)))
    }
}

impl FromStr for SlotTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NaiveTime::parse_from_str(s, Self::FORMAT)
            .map(Self)
            .with_context(|| format!("`{s}` is not a `HH:MM` time"))
    }
}

impl Display for SlotTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl Debug for SlotTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// One time-of-day bucket of the household dataset.
#[must_use]
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
pub struct TimeSlot {
    #[serde_as(as = "DisplayFromStr")]
    pub time: SlotTime,

    /// Energy consumed during the slot.
    pub usage: KilowattHours,

    pub cost: Cost,

    /// Energy produced by the solar panels during the slot.
    pub solar: KilowattHours,

    /// Precomputed favourability score in `[0, 1]`, higher is better.
    pub efficiency: Efficiency,

    /// Energy available for scheduled tasks in this slot.
    pub capacity: KilowattHours,
}

impl TimeSlot {
    /// Solar surplus bought per dollar spent in this slot.
    ///
    /// Undefined for free slots.
    pub fn net_solar_yield(&self) -> Option<f64> {
        (self.solar - self.usage) / self.cost
    }

    pub fn validate(&self) -> Result {
        ensure!(self.efficiency.is_valid(), "efficiency {} is outside of [0, 1]", self.efficiency);
        ensure!(self.capacity.is_non_negative(), "capacity {} is negative", self.capacity);
        ensure!(self.usage.is_non_negative(), "usage {} is negative", self.usage);
        ensure!(self.solar.is_non_negative(), "solar {} is negative", self.solar);
        Ok(())
    }
}
