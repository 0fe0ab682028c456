use std::{
    fmt::{Display, Formatter},
    ops::Div,
};

use crate::quantity::energy::KilowattHours;

quantity!(Cost, "$");

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// Energy per dollar spent, used to rank slots by how much solar surplus their cost buys.
impl Div<Cost> for KilowattHours {
    type Output = Option<f64>;

    fn div(self, rhs: Cost) -> Self::Output {
        (rhs != Cost::ZERO).then(|| self.0 / rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Cost(0.245).to_string(), "$0.24");
        assert_eq!(Cost(1.2).to_string(), "$1.20");
    }

    #[test]
    fn test_energy_per_cost() {
        assert_eq!(KilowattHours(1.0) / Cost(0.5), Some(2.0));
        assert_eq!(KilowattHours(1.0) / Cost::ZERO, None);
    }
}
