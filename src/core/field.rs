//! Rendering and hashing for everything that can sit in a shape field.
//!
//! Hash contributions are fixed per value type so a shape's hash code is the
//! same in every process: an accumulator seeded at 1, multiplied by 31 per
//! field, with absent fields contributing 0.

use chrono::{DateTime, Utc};
use std::fmt;

pub type Timestamp = DateTime<Utc>;

const PRIME: i32 = 31;

pub trait ShapeField {
    /// Writes the value the way it appears inside a shape's `Display` output.
    fn render(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result;

    fn hash_code(&self) -> i32;

    /// Value equality as shapes see it. Must agree with `hash_code`.
    fn field_eq(&self, other: &Self) -> bool;
}

/// Folds per-field hashes in declared order.
pub fn combine_hash(fields: &[i32]) -> i32 {
    fields
        .iter()
        .fold(1i32, |acc, h| PRIME.wrapping_mul(acc).wrapping_add(*h))
}

pub fn option_hash<T: ShapeField>(value: &Option<T>) -> i32 {
    value.as_ref().map_or(0, ShapeField::hash_code)
}

pub fn option_eq<T: ShapeField>(left: &Option<T>, right: &Option<T>) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => left.field_eq(right),
        (None, None) => true,
        _ => false,
    }
}

fn fold_long(value: i64) -> i32 {
    (value ^ ((value as u64) >> 32) as i64) as i32
}

impl ShapeField for String {
    fn render(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        out.write_str(self)
    }

    fn field_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_code(&self) -> i32 {
        self.encode_utf16()
            .fold(0i32, |acc, unit| PRIME.wrapping_mul(acc).wrapping_add(unit as i32))
    }
}

impl ShapeField for i32 {
    fn render(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(out, "{}", self)
    }

    fn hash_code(&self) -> i32 {
        *self
    }

    fn field_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl ShapeField for i64 {
    fn render(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(out, "{}", self)
    }

    fn hash_code(&self) -> i32 {
        fold_long(*self)
    }

    fn field_eq(&self, other: &Self) -> bool {
        self == other
    }
}

/// Collapses `-0.0` onto `0.0` and every NaN onto one payload, so a NaN
/// equals itself and both zeros compare and hash alike.
fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl ShapeField for f64 {
    fn render(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keep the fractional part visible for whole numbers ("1.0", not "1").
        if self.is_finite() && self.fract() == 0.0 {
            write!(out, "{:.1}", self)
        } else {
            write!(out, "{}", self)
        }
    }

    fn hash_code(&self) -> i32 {
        fold_long(canonical_bits(*self) as i64)
    }

    fn field_eq(&self, other: &Self) -> bool {
        canonical_bits(*self) == canonical_bits(*other)
    }
}

impl ShapeField for bool {
    fn render(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(out, "{}", self)
    }

    fn hash_code(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }

    fn field_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl ShapeField for Timestamp {
    fn render(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        out.write_str(&self.to_rfc3339())
    }

    fn hash_code(&self) -> i32 {
        fold_long(self.timestamp_millis())
    }

    fn field_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: ShapeField> ShapeField for Vec<T> {
    fn render(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        out.write_str("[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                out.write_str(", ")?;
            }
            item.render(out)?;
        }
        out.write_str("]")
    }

    fn hash_code(&self) -> i32 {
        self.iter().fold(1i32, |acc, item| {
            PRIME.wrapping_mul(acc).wrapping_add(item.hash_code())
        })
    }

    fn field_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().zip(other).all(|(left, right)| left.field_eq(right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Rendered<'a, T: ShapeField>(&'a T);

    impl<T: ShapeField> fmt::Display for Rendered<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.render(f)
        }
    }

    #[test]
    fn test_string_hash_matches_reference_values() {
        assert_eq!("".to_string().hash_code(), 0);
        assert_eq!("a".to_string().hash_code(), 97);
        assert_eq!("abc".to_string().hash_code(), 96354);
        // Overflow wraps instead of panicking
        assert_eq!("/dev/sdh".to_string().hash_code(), "/dev/sdh".to_string().hash_code());
        assert_ne!("t2.micro".to_string().hash_code(), "t2.small".to_string().hash_code());
    }

    #[test]
    fn test_scalar_hashes() {
        assert_eq!(true.hash_code(), 1231);
        assert_eq!(false.hash_code(), 1237);
        assert_eq!(42i32.hash_code(), 42);
        assert_eq!(7i64.hash_code(), 7);
        assert_eq!((1i64 << 32).hash_code(), 1);
        assert_eq!(0.0f64.hash_code(), (-0.0f64).hash_code());
        assert_eq!(1.0f64.hash_code(), 1072693248);
    }

    #[test]
    fn test_float_equality_follows_hash() {
        assert!(f64::NAN.field_eq(&f64::NAN));
        assert!(f64::NAN.field_eq(&-f64::NAN));
        assert_eq!(f64::NAN.hash_code(), (-f64::NAN).hash_code());
        assert!(0.0f64.field_eq(&-0.0));
        assert!(f64::INFINITY.field_eq(&f64::INFINITY));
        assert!(!f64::INFINITY.field_eq(&f64::NEG_INFINITY));
        assert!(!1.5f64.field_eq(&f64::NAN));
    }

    #[test]
    fn test_option_and_list_equality() {
        assert!(option_eq::<f64>(&None, &None));
        assert!(!option_eq(&Some(1i32), &None));
        assert!(option_eq(&Some(vec![f64::NAN, 2.0]), &Some(vec![f64::NAN, 2.0])));
        assert!(!vec![1.0f64].field_eq(&vec![1.0, 2.0]));
    }

    #[test]
    fn test_list_hash_and_render() {
        let values = vec!["a".to_string(), "b".to_string()];
        assert_eq!(values.hash_code(), 31 * (31 + 97) + 98);
        assert_eq!(Vec::<String>::new().hash_code(), 1);
        assert_eq!(Rendered(&values).to_string(), "[a, b]");
        assert_eq!(Rendered(&vec![1i32, 2, 3]).to_string(), "[1, 2, 3]");
    }

    #[test]
    fn test_render_scalars() {
        assert_eq!(Rendered(&2.0f64).to_string(), "2.0");
        assert_eq!(Rendered(&0.25f64).to_string(), "0.25");
        assert_eq!(Rendered(&true).to_string(), "true");

        let launched = Utc.with_ymd_and_hms(2020, 5, 1, 12, 30, 0).unwrap();
        assert_eq!(Rendered(&launched).to_string(), "2020-05-01T12:30:00+00:00");
    }

    #[test]
    fn test_combine_hash() {
        assert_eq!(combine_hash(&[]), 1);
        assert_eq!(combine_hash(&[0, 0]), 961);
        assert_eq!(option_hash::<i32>(&None), 0);
        assert_eq!(option_hash(&Some(5i32)), 5);
    }
}
