use std::fmt::{Display, Formatter};

quantity!(Efficiency, "");

impl Efficiency {
    pub const MAX: Self = Self(1.0);

    pub fn is_valid(self) -> bool {
        (Self::ZERO..=Self::MAX).contains(&self)
    }
}

impl Display for Efficiency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
