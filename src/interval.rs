use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// Closed range `[lower_bound, upper_bound]`, used for axis and layout math.
///
/// An interval with `lower_bound > upper_bound` is invalid; the default
/// value `[0, -1]` is invalid.
#[derive(Copy, Clone, Debug)]
pub struct Interval {
    lower_bound: f64,
    upper_bound: f64,
}

impl Default for Interval {
    fn default() -> Self {
        Interval {
            lower_bound: 0.0,
            upper_bound: -1.0,
        }
    }
}

impl Interval {
    pub const fn new(lower_bound: f64, upper_bound: f64) -> Self {
        Interval {
            lower_bound,
            upper_bound,
        }
    }

    /// Interval spanning both values, in either order.
    pub fn normalized(value1: f64, value2: f64) -> Self {
        if value1 < value2 {
            Interval::new(value1, value2)
        } else {
            Interval::new(value2, value1)
        }
    }

    pub fn set_interval(&mut self, lower_bound: f64, upper_bound: f64) {
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn set_lower_bound(&mut self, value: f64) {
        self.lower_bound = value;
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    pub fn set_upper_bound(&mut self, value: f64) {
        self.upper_bound = value;
    }

    /// `upper_bound - lower_bound`, 0 for invalid intervals.
    pub fn width(&self) -> f64 {
        if self.upper_bound > self.lower_bound {
            self.upper_bound - self.lower_bound
        } else {
            0.0
        }
    }

    pub fn set_width(&mut self, width: f64) {
        self.upper_bound = self.lower_bound + width;
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower_bound && value <= self.upper_bound
    }

    pub fn translate(&mut self, offset: f64) {
        self.lower_bound += offset;
        self.upper_bound += offset;
    }

    pub fn translated(&self, offset: f64) -> Self {
        Interval::new(self.lower_bound + offset, self.upper_bound + offset)
    }

    pub fn intersects(&self, other: &Interval) -> bool {
        if !self.is_valid() || !other.is_valid() {
            return false;
        }

        if self.lower_bound <= other.lower_bound {
            other.lower_bound <= self.upper_bound
        } else {
            self.lower_bound <= other.upper_bound
        }
    }

    /// Common part of both intervals, invalid when they do not overlap.
    pub fn intersected(&self, other: &Interval) -> Interval {
        if !self.is_valid() {
            return *self;
        }

        if !other.is_valid() {
            return *other;
        }

        let lower_bound = self.lower_bound.max(other.lower_bound);
        let upper_bound = self.upper_bound.min(other.upper_bound);
        if lower_bound > upper_bound {
            return Interval::default();
        }

        Interval::new(lower_bound, upper_bound)
    }

    /// Grows to cover `other`. Invalid intervals do not contribute.
    pub fn unite(&mut self, other: &Interval) {
        if !self.is_valid() {
            if other.is_valid() {
                *self = *other;
            } else {
                self.invalidate();
            }
            return;
        }

        if !other.is_valid() {
            return;
        }

        self.lower_bound = self.lower_bound.min(other.lower_bound);
        self.upper_bound = self.upper_bound.max(other.upper_bound);
    }

    pub fn united(&self, other: &Interval) -> Interval {
        let mut interval = *self;
        interval.unite(other);
        interval
    }

    /// Grows to include `value`; an invalid interval becomes `[value, value]`.
    pub fn extend(&mut self, value: f64) {
        if !self.is_valid() {
            self.lower_bound = value;
            self.upper_bound = value;
        } else {
            self.lower_bound = self.lower_bound.min(value);
            self.upper_bound = self.upper_bound.max(value);
        }
    }

    pub fn extended(&self, value: f64) -> Interval {
        let mut interval = *self;
        interval.extend(value);
        interval
    }

    pub fn is_valid(&self) -> bool {
        self.lower_bound <= self.upper_bound
    }

    pub fn is_null(&self) -> bool {
        self.lower_bound == self.upper_bound
    }

    pub fn invalidate(&mut self) {
        *self = Interval::default();
    }
}

fn fuzzy_eq(a: f64, b: f64) -> bool {
    (a - b).abs() * 1e12 <= a.abs().min(b.abs())
}

/// Bounds compare with a relative tolerance of 1e-12.
impl PartialEq for Interval {
    fn eq(&self, other: &Interval) -> bool {
        fuzzy_eq(self.lower_bound, other.lower_bound) && fuzzy_eq(self.upper_bound, other.upper_bound)
    }
}

impl BitOr for Interval {
    type Output = Interval;

    fn bitor(self, other: Interval) -> Interval {
        self.united(&other)
    }
}

impl BitOrAssign for Interval {
    fn bitor_assign(&mut self, other: Interval) {
        self.unite(&other);
    }
}

impl BitAnd for Interval {
    type Output = Interval;

    fn bitand(self, other: Interval) -> Interval {
        self.intersected(&other)
    }
}

impl BitAndAssign for Interval {
    fn bitand_assign(&mut self, other: Interval) {
        *self = self.intersected(&other);
    }
}

impl BitOr<f64> for Interval {
    type Output = Interval;

    fn bitor(self, value: f64) -> Interval {
        self.extended(value)
    }
}

impl BitOrAssign<f64> for Interval {
    fn bitor_assign(&mut self, value: f64) {
        self.extend(value);
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Interval({}, {})", self.lower_bound, self.upper_bound)
    }
}
