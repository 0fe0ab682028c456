use comfy_table::Color;

use crate::quantity::efficiency::Efficiency;

/// Coarse bucket of an efficiency score.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EfficiencyBand {
    Low,
    Moderate,
    High,
}

impl From<Efficiency> for EfficiencyBand {
    fn from(efficiency: Efficiency) -> Self {
        if efficiency <= Efficiency(0.33) {
            Self::Low
        } else if efficiency <= Efficiency(0.66) {
            Self::Moderate
        } else {
            Self::High
        }
    }
}

impl EfficiencyBand {
    pub const fn color(self) -> Color {
        match self {
            Self::Low => Color::Red,
            Self::Moderate => Color::DarkYellow,
            Self::High => Color::Green,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(EfficiencyBand::from(Efficiency(0.2)), EfficiencyBand::Low);
        assert_eq!(EfficiencyBand::from(Efficiency(0.33)), EfficiencyBand::Low);
        assert_eq!(EfficiencyBand::from(Efficiency(0.4)), EfficiencyBand::Moderate);
        assert_eq!(EfficiencyBand::from(Efficiency(0.66)), EfficiencyBand::Moderate);
        assert_eq!(EfficiencyBand::from(Efficiency(0.7)), EfficiencyBand::High);
    }
}
