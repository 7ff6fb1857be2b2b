use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::enums::{TOLERANCE_DENOMINATOR, TOLERANCE_NUMERATOR};

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// 항상 기약분수 형태로 유지되는 분수.
///
/// 분모는 0 이 될 수 없으며 양수로 정규화됩니다.
/// plate, target 계산은 모두 이 타입으로 정확하게 수행되고, `f64` 값은 표시용으로만 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction {
        numerator: 0,
        denominator: 1,
    };

    /// 분모가 0 이면 None 을 반환합니다.
    pub fn new(numerator: i64, denominator: i64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        Some(Self::reduce(numerator, denominator))
    }

    /// 승리 판정 허용 오차 (0.05)
    pub fn tolerance() -> Self {
        Self::reduce(TOLERANCE_NUMERATOR, TOLERANCE_DENOMINATOR)
    }

    // 호출부에서 분모가 0 이 아님을 보장해야 합니다.
    fn reduce(numerator: i64, denominator: i64) -> Self {
        debug_assert!(denominator != 0);
        let divisor = gcd(numerator, denominator).max(1);
        let sign = if denominator < 0 { -1 } else { 1 };
        Self {
            numerator: sign * numerator / divisor,
            denominator: sign * denominator / divisor,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator,
        }
    }

    /// `"<whole> and <remainder>/<denominator>"` 형태의 대분수 표기.
    pub fn to_mixed_number(&self) -> String {
        to_mixed_number(self.numerator, self.denominator)
    }
}

/// 대분수 표기를 만듭니다.
///
/// 나머지가 0 이면 정수부만, 정수부가 0 이면 분수만 반환합니다.
/// 분모가 0 이면 빈 문자열을 반환합니다.
pub fn to_mixed_number(numerator: i64, denominator: i64) -> String {
    if denominator == 0 {
        return String::new();
    }
    let whole = numerator.div_euclid(denominator);
    let remainder = numerator.rem_euclid(denominator);
    if remainder == 0 {
        return whole.to_string();
    }
    if whole == 0 {
        return format!("{}/{}", remainder, denominator);
    }
    format!("{} and {}/{}", whole, remainder, denominator)
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        Fraction::reduce(
            self.numerator * rhs.denominator + rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        Fraction::reduce(
            self.numerator * rhs.denominator - rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // 분모가 항상 양수이므로 교차 곱으로 비교합니다.
        let lhs = self.numerator as i128 * other.denominator as i128;
        let rhs = other.numerator as i128 * self.denominator as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Serialize for Fraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Fraction", 5)?;
        state.serialize_field("numerator", &self.numerator)?;
        state.serialize_field("denominator", &self.denominator)?;
        state.serialize_field("text", &self.to_string())?;
        state.serialize_field("mixed", &self.to_mixed_number())?;
        state.serialize_field("value", &self.value())?;
        state.end()
    }
}
