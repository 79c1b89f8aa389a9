//! Exact rational arithmetic for the elimination core. Floating point is
//! never good enough here: a pivot that is "almost zero" must still count as
//! a pivot, so every matrix entry is kept as an exact fraction.
use crate::Balancer::errors::BalanceError;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Greatest common divisor using Euclidean algorithm, always non-negative
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Least common multiple, zero when either argument is zero
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b)).abs() * b.abs()
}

/// Exact rational number.
/// Invariant: den > 0, gcd(num, den) == 1, zero is stored as 0/1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frac {
    num: i64,
    den: i64,
}

impl Frac {
    /// Create a rational, normalizing the sign and reducing by GCD
    pub fn new(num: i64, den: i64) -> Result<Self, BalanceError> {
        if den == 0 {
            return Err(BalanceError::DivisionByZero);
        }
        Ok(Frac::reduced(num, den))
    }

    pub fn from_int(n: i64) -> Self {
        Frac { num: n, den: 1 }
    }

    // callers guarantee den != 0
    fn reduced(num: i64, den: i64) -> Self {
        let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
        if num == 0 {
            return Frac { num: 0, den: 1 };
        }
        let g = gcd(num, den);
        Frac {
            num: num / g,
            den: den / g,
        }
    }

    pub fn num(&self) -> i64 {
        self.num
    }

    pub fn den(&self) -> i64 {
        self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    pub fn is_negative(&self) -> bool {
        self.num < 0
    }

    /// Division returning an error on a zero divisor
    pub fn checked_div(self, rhs: Frac) -> Result<Self, BalanceError> {
        if rhs.num == 0 {
            return Err(BalanceError::DivisionByZero);
        }
        // a/b / c/d = (a*d)/(b*c), cross-reduced to keep intermediates small
        let g1 = gcd(self.num, rhs.num);
        let g2 = gcd(self.den, rhs.den);
        Ok(Frac::reduced(
            (self.num / g1) * (rhs.den / g2),
            (self.den / g2) * (rhs.num / g1),
        ))
    }
}

impl Add for Frac {
    type Output = Frac;

    fn add(self, rhs: Self) -> Self::Output {
        Frac::reduced(
            self.num * rhs.den + rhs.num * self.den,
            self.den * rhs.den,
        )
    }
}

impl Sub for Frac {
    type Output = Frac;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Mul for Frac {
    type Output = Frac;

    fn mul(self, rhs: Self) -> Self::Output {
        // Cross-reduce before multiplying to minimize overflow
        let g1 = gcd(self.num, rhs.den);
        let g2 = gcd(rhs.num, self.den);
        Frac::reduced(
            (self.num / g1) * (rhs.num / g2),
            (self.den / g2) * (rhs.den / g1),
        )
    }
}

impl Neg for Frac {
    type Output = Frac;

    fn neg(self) -> Self::Output {
        Frac {
            num: -self.num,
            den: self.den,
        }
    }
}

impl fmt::Display for Frac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
