use derive_more::{
    Add, AddAssign, Deref, DerefMut, Display, From, Into, Sub, SubAssign, Sum,
};

/// Points per inch.
pub const PT_PER_IN: f32 = 72.0;
/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// A distance in PDF points, where 1 pt = 1/72 inch. This is the unit every
/// layout calculation happens in; [Mm] and [In] exist only to be converted
/// from.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    From,
    Into,
    Display,
    Deref,
    DerefMut,
)]
pub struct Pt(pub f32);

impl Pt {
    /// The smaller of two distances
    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }

    /// The larger of two distances
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }
}

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl std::ops::Neg for Pt {
    type Output = Pt;

    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}

/// A distance in millimetres. Business form layouts are specified in
/// millimetres, so most callers build geometry with this
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, From, Into, Display)]
pub struct Mm(pub f32);

/// A distance in inches
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, From, Into, Display)]
pub struct In(pub f32);

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Pt {
        Pt(mm.0 * PT_PER_MM)
    }
}

impl From<In> for Pt {
    fn from(inches: In) -> Pt {
        Pt(inches.0 * PT_PER_IN)
    }
}

impl From<Pt> for Mm {
    fn from(pt: Pt) -> Mm {
        Mm(pt.0 / PT_PER_MM)
    }
}

impl From<Pt> for In {
    fn from(pt: Pt) -> In {
        In(pt.0 / PT_PER_IN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_units() {
        let pt: Pt = Mm(25.4).into();
        assert!((pt.0 - 72.0).abs() < f32::EPSILON);

        let pt: Pt = In(1.0).into();
        assert!((pt.0 - 72.0).abs() < f32::EPSILON);

        let mm: Mm = Pt(72.0).into();
        assert!((mm.0 - 25.4).abs() < 0.0001);
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Pt(10.0) + Pt(5.0), Pt(15.0));
        assert_eq!(Pt(10.0) - Pt(5.0), Pt(5.0));
        assert_eq!(Pt(10.0) * 1.5, Pt(15.0));
        assert_eq!(Pt(10.0) / 2.0, Pt(5.0));
        let total: Pt = [Pt(1.0), Pt(2.0), Pt(3.0)].into_iter().sum();
        assert_eq!(total, Pt(6.0));
    }
}
