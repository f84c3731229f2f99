use core::cmp::Ordering;
use core::fmt::{Debug, Display, Formatter};
use core::ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign};
use core::str::FromStr;

use crate::errors::{ArithmeticError, DomainError, ParseError};
use crate::euclid::gcd;
use crate::natural::{BitNatural, Natural, WordNatural};
use crate::signed::Signed;

/// Fraction of a signed numerator over a natural denominator.
///
/// Always stored in lowest terms with a nonzero denominator, and zero is
/// `0/1`, so the derived equality and hashing compare values.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational<M> {
    numerator: Signed<M>,
    denominator: M,
}

pub type BitRational = Rational<BitNatural>;
pub type WordRational = Rational<WordNatural>;

impl<M: Natural> Rational<M> {
    /// `numerator / denominator`, reduced. The sign of the denominator moves
    /// to the numerator.
    pub fn new(numerator: Signed<M>, denominator: Signed<M>) -> Result<Self, DomainError> {
        if denominator.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        let (denominator_negative, denominator) = denominator.into_parts();
        let (numerator_negative, numerator) = numerator.into_parts();
        Ok(Self::reduced(
            numerator_negative ^ denominator_negative,
            numerator,
            denominator,
        ))
    }

    pub fn from_integer(value: Signed<M>) -> Self {
        Self {
            numerator: value,
            denominator: M::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(Signed::zero())
    }

    pub fn one() -> Self {
        Self::from_integer(Signed::one())
    }

    /// `denominator` must be nonzero.
    fn reduced(negative: bool, mut numerator: M, mut denominator: M) -> Self {
        let divisor = gcd(&numerator, &denominator);
        if divisor != M::one() {
            numerator /= &divisor;
            denominator /= &divisor;
        }
        Self {
            numerator: Signed::from_parts(negative, numerator),
            denominator,
        }
    }

    #[inline(always)]
    pub fn numerator(&self) -> &Signed<M> {
        &self.numerator
    }

    #[inline(always)]
    pub fn denominator(&self) -> &M {
        &self.denominator
    }

    pub fn into_parts(self) -> (Signed<M>, M) {
        (self.numerator, self.denominator)
    }

    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    #[inline(always)]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == M::one()
    }

    pub fn negate(&mut self) {
        self.numerator.negate();
    }

    pub fn checked_recip(&self) -> Result<Self, DomainError> {
        if self.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        Ok(Self {
            numerator: Signed::from_parts(self.is_negative(), self.denominator.clone()),
            denominator: self.numerator.magnitude().clone(),
        })
    }

    pub fn checked_div(&self, divisor: &Self) -> Result<Self, DomainError> {
        if divisor.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        let mut numerator = self.numerator.magnitude().clone();
        numerator *= &divisor.denominator;
        let mut denominator = self.denominator.clone();
        denominator *= divisor.numerator.magnitude();
        Ok(Self::reduced(
            self.is_negative() ^ divisor.is_negative(),
            numerator,
            denominator,
        ))
    }

    /// `self.numerator * other.denominator`.
    fn scaled_numerator(&self, other: &Self) -> Signed<M> {
        let mut scaled = self.numerator.clone();
        scaled *= &Signed::from(other.denominator.clone());
        scaled
    }

    fn add_scaled(&mut self, rhs: &Self, subtract: bool) {
        let mut numerator = self.scaled_numerator(rhs);
        let other = rhs.scaled_numerator(self);
        if subtract {
            numerator -= &other;
        } else {
            numerator += &other;
        }
        let mut denominator = core::mem::take(&mut self.denominator);
        denominator *= &rhs.denominator;
        let (negative, numerator) = numerator.into_parts();
        *self = Self::reduced(negative, numerator, denominator);
    }
}

impl<M: Natural> Default for Rational<M> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<M: Natural> From<Signed<M>> for Rational<M> {
    #[inline(always)]
    fn from(value: Signed<M>) -> Self {
        Self::from_integer(value)
    }
}

impl<M: Natural> From<M> for Rational<M> {
    #[inline(always)]
    fn from(value: M) -> Self {
        Self::from_integer(Signed::from(value))
    }
}

impl<M: Natural> PartialOrd for Rational<M> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<M: Natural> Ord for Rational<M> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            _ => self
                .scaled_numerator(other)
                .cmp(&other.scaled_numerator(self)),
        }
    }
}

impl<M: Natural> AddAssign<&Rational<M>> for Rational<M> {
    fn add_assign(&mut self, rhs: &Rational<M>) {
        self.add_scaled(rhs, false);
    }
}

impl<M: Natural> SubAssign<&Rational<M>> for Rational<M> {
    fn sub_assign(&mut self, rhs: &Rational<M>) {
        self.add_scaled(rhs, true);
    }
}

impl<M: Natural> MulAssign<&Rational<M>> for Rational<M> {
    fn mul_assign(&mut self, rhs: &Rational<M>) {
        let (negative, mut numerator) = core::mem::take(&mut self.numerator).into_parts();
        numerator *= rhs.numerator.magnitude();
        let mut denominator = core::mem::take(&mut self.denominator);
        denominator *= &rhs.denominator;
        *self = Self::reduced(negative ^ rhs.is_negative(), numerator, denominator);
    }
}

impl<M: Natural> DivAssign<&Rational<M>> for Rational<M> {
    /// # Panics
    /// If `rhs` is zero.
    fn div_assign(&mut self, rhs: &Rational<M>) {
        match self.checked_div(rhs) {
            Ok(quotient) => *self = quotient,
            Err(e) => panic!("{e}"),
        }
    }
}

macro_rules! forward_rational_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl<M: Natural> core::ops::$imp<Rational<M>> for Rational<M> {
            type Output = Rational<M>;

            #[inline(always)]
            fn $method(mut self, rhs: Rational<M>) -> Rational<M> {
                <Self as $assign_imp<&Rational<M>>>::$assign_method(&mut self, &rhs);
                self
            }
        }

        impl<M: Natural> core::ops::$imp<&Rational<M>> for Rational<M> {
            type Output = Rational<M>;

            #[inline(always)]
            fn $method(mut self, rhs: &Rational<M>) -> Rational<M> {
                <Self as $assign_imp<&Rational<M>>>::$assign_method(&mut self, rhs);
                self
            }
        }

        impl<M: Natural> core::ops::$imp<&Rational<M>> for &Rational<M> {
            type Output = Rational<M>;

            #[inline(always)]
            fn $method(self, rhs: &Rational<M>) -> Rational<M> {
                let mut result = self.clone();
                <Rational<M> as $assign_imp<&Rational<M>>>::$assign_method(&mut result, rhs);
                result
            }
        }

        impl<M: Natural> $assign_imp<Rational<M>> for Rational<M> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Rational<M>) {
                <Self as $assign_imp<&Rational<M>>>::$assign_method(self, &rhs);
            }
        }
    };
}

forward_rational_binop!(Add, add, AddAssign, add_assign);
forward_rational_binop!(Sub, sub, SubAssign, sub_assign);
forward_rational_binop!(Mul, mul, MulAssign, mul_assign);
forward_rational_binop!(Div, div, DivAssign, div_assign);

impl<M: Natural> Neg for Rational<M> {
    type Output = Rational<M>;

    fn neg(mut self) -> Rational<M> {
        self.negate();
        self
    }
}

impl<M: Natural> Neg for &Rational<M> {
    type Output = Rational<M>;

    fn neg(self) -> Rational<M> {
        -self.clone()
    }
}

impl<M: Natural> num_traits::Zero for Rational<M> {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl<M: Natural> num_traits::One for Rational<M> {
    fn one() -> Self {
        Self::one()
    }
}

/// `n/d`, or just `n` for integers.
impl<M: Natural> Display for Rational<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl<M: Natural> Debug for Rational<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Rational({}/{})", self.numerator, self.denominator)
    }
}

impl<M: Natural> FromStr for Rational<M> {
    type Err = ArithmeticError;

    /// Parses `n` or `n/d`, both signed decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((numerator, denominator)) = s.split_once('/') else {
            return Ok(Self::from_integer(s.parse()?));
        };
        let offset = numerator.len() + 1;
        let numerator: Signed<M> = numerator.parse()?;
        let denominator: Signed<M> = denominator
            .parse()
            .map_err(|e: ParseError| e.shifted(offset))?;
        Ok(Self::new(numerator, denominator)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::power::{power_group, power_monoid, Multiplies};
    use crate::WordInteger;
    use proptest::{prop_assert, prop_assert_eq, proptest};

    fn q(numerator: i64, denominator: i64) -> WordRational {
        WordRational::new(WordInteger::from(numerator), WordInteger::from(denominator)).unwrap()
    }

    fn parts(value: &WordRational) -> (i64, u64) {
        (
            i64::try_from(value.numerator()).unwrap(),
            u64::try_from(value.denominator()).unwrap(),
        )
    }

    #[test]
    fn construction_reduces() {
        assert_eq!(parts(&q(-19, 17)), (-19, 17));
        assert_eq!(parts(&q(22, -7)), (-22, 7));
        assert_eq!(parts(&q(21, -7)), (-3, 1));
        assert_eq!(parts(&q(412, 129847412)), (103, 32461853));
        assert_eq!(parts(&q(0, -5)), (0, 1));
        assert!(!q(0, -5).is_negative());
        assert_eq!(q(0, 9), WordRational::zero());
    }

    #[test]
    fn zero_denominator_is_rejected() {
        assert_eq!(
            WordRational::new(WordInteger::one(), WordInteger::zero()),
            Err(DomainError::DivisionByZero)
        );
        assert_eq!(WordRational::zero().checked_recip(), Err(DomainError::DivisionByZero));
        assert_eq!(q(3, 4).checked_div(&q(0, 1)), Err(DomainError::DivisionByZero));
    }

    #[test]
    fn equality_after_reduction() {
        assert_eq!(q(14, 5), q(14, 5));
        assert_eq!(q(14, 7), q(10, 5));
        assert_eq!(q(-14, 7), q(10, -5));
        assert_ne!(q(-14, -7), q(10, -5));
        assert_ne!(q(14, 5), q(10, 5));
        assert_ne!(q(10, 5), q(10, 7));
    }

    #[test]
    fn ordering() {
        assert!(q(-2, 5) < q(3, 5));
        assert!(q(2, 5) < q(3, 5));
        assert!(q(-3, 5) < q(2, 5));
        assert!(q(4, 7) < q(9, 15));
        assert!(q(3, 5) <= q(6, 10));
        assert!(q(3, 5) > q(2, 7));
        assert!(q(2, 5) > q(-3, 5));
        assert!(q(-3, 5) >= q(-6, 10));
        assert!(q(-1, 2) < q(-1, 3));
    }

    #[test]
    fn addition_and_subtraction() {
        assert_eq!(q(11, 5) + q(13, 5), q(24, 5));
        assert_eq!(q(13, 21) + q(13, 5), q(338, 105));
        assert_eq!(q(13, 21) + q(-13, 21), WordRational::zero());
        assert_eq!(q(13, 21) + q(-42, 21), q(-29, 21));
        assert_eq!(q(13, -21) + q(-42, 21), q(-55, 21));
        assert_eq!(q(11, 5) - q(25, -1412), q(15657, 7060));
    }

    #[test]
    fn multiplication_and_division() {
        assert_eq!(q(11, 5) * q(-4, 1), q(-44, 5));
        assert_eq!(q(15, 5) * q(-4, 24), q(-60, 120));
        assert_eq!(q(12, 5) / q(-4, 1), q(-3, 5));
        assert_eq!(q(15, 5) / q(-4, 24), q(-18, 1));
        assert_eq!(q(-7, 3).checked_recip(), Ok(q(-3, 7)));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn operator_division_by_zero_panics() {
        let _ = q(1, 2) / WordRational::zero();
    }

    #[test]
    fn failed_division_keeps_the_receiver() {
        let mut value = q(5, 6);
        let zero = WordRational::zero();
        assert!(std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| value /= &zero)).is_err());
        assert_eq!(value, q(5, 6));
    }

    #[test]
    fn powers_with_negative_exponents() {
        assert_eq!(power_group(q(2, 3), -3i32, &Multiplies), q(27, 8));
        assert_eq!(power_group(q(-2, 3), -3i32, &Multiplies), q(-27, 8));
        assert_eq!(power_monoid(q(-1, 2), 5u32, &Multiplies), q(-1, 32));
        assert_eq!(power_group(q(5, 7), 0i8, &Multiplies), WordRational::one());
    }

    #[test]
    fn text() {
        assert_eq!(q(-3, 5).to_string(), "-3/5");
        assert_eq!(q(36, -2).to_string(), "-18");
        assert_eq!(WordRational::zero().to_string(), "0");
        assert_eq!(format!("{:?}", q(4, 1)), "Rational(4/1)");

        assert_eq!("6/-8".parse::<WordRational>(), Ok(q(-3, 4)));
        assert_eq!("+12".parse::<BitRational>().unwrap().to_string(), "12");
        assert_eq!(
            "1/0".parse::<WordRational>(),
            Err(ArithmeticError::Domain(DomainError::DivisionByZero))
        );
        assert_eq!(
            "1/2x".parse::<WordRational>(),
            Err(ArithmeticError::Parse(ParseError::InvalidDigit {
                position: 3,
                character: 'x'
            }))
        );
        assert_eq!(
            "/2".parse::<WordRational>(),
            Err(ArithmeticError::Parse(ParseError::Empty))
        );
    }

    #[test]
    fn field_laws() {
        proptest!(|(a in -1000i64..1000, b in 1i64..1000, c in -1000i64..1000, d in 1i64..1000)| {
            let (x, y) = (q(a, b), q(c, d));
            prop_assert_eq!(&(&x + &y) - &y, x.clone());
            prop_assert_eq!(&x * &y, q(a * c, b * d));
            prop_assert_eq!(x.cmp(&y), (a * d).cmp(&(c * b)));
            if c != 0 {
                prop_assert_eq!(&(&x * &y) / &y, x.clone());
            }
            let (numerator, denominator) = parts(&(&x + &y));
            prop_assert!(denominator > 0);
            prop_assert_eq!(
                num_integer::Integer::gcd(&numerator.unsigned_abs(), &denominator),
                if numerator == 0 { denominator } else { 1 }
            );
        })
    }
}
