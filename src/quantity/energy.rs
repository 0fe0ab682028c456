use std::fmt::{Display, Formatter};

quantity!(KilowattHours, "kWh");

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kWh", self.0)
    }
}

impl KilowattHours {
    pub const fn is_non_negative(self) -> bool {
        self.0 >= 0.0
    }
}
