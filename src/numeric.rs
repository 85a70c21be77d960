//! Numeric sample values
//!
//! Metric sources report integers and floats of several widths. [`Numeric`]
//! names each accepted width and converts to `f64` with a single total
//! function; text is parsed explicitly and rejected when it is not a number.

use core::str::FromStr;

use crate::traits::StatsError;

/// A sample value of any supported numeric width
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Numeric {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
}

impl Numeric {
    /// Canonical floating representation
    ///
    /// 64-bit integers beyond 2^53 round to the nearest representable value.
    pub fn to_f64(self) -> f64 {
        match self {
            Numeric::I8(v) => f64::from(v),
            Numeric::I16(v) => f64::from(v),
            Numeric::I32(v) => f64::from(v),
            Numeric::I64(v) => v as f64,
            Numeric::U8(v) => f64::from(v),
            Numeric::U16(v) => f64::from(v),
            Numeric::U32(v) => f64::from(v),
            Numeric::U64(v) => v as f64,
            Numeric::F32(v) => f64::from(v),
            Numeric::F64(v) => v,
        }
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Numeric {
                fn from(v: $ty) -> Self {
                    Numeric::$variant(v)
                }
            }
        )*
    };
}

impl_from_primitive! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl From<Numeric> for f64 {
    fn from(n: Numeric) -> Self {
        n.to_f64()
    }
}

impl FromStr for Numeric {
    type Err = StatsError;

    /// Integers parse to [`Numeric::I64`] or [`Numeric::U64`], anything else
    /// numeric to [`Numeric::F64`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();

        if let Ok(v) = text.parse::<i64>() {
            return Ok(Numeric::I64(v));
        }
        if let Ok(v) = text.parse::<u64>() {
            return Ok(Numeric::U64(v));
        }
        match text.parse::<f64>() {
            Ok(v) if !v.is_nan() => Ok(Numeric::F64(v)),
            _ => Err(StatsError::NonNumeric(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(Numeric::from(-3i8).to_f64(), -3.0);
        assert_eq!(Numeric::from(300i16).to_f64(), 300.0);
        assert_eq!(Numeric::from(-70_000i32).to_f64(), -70_000.0);
        assert_eq!(Numeric::from(1i64 << 40).to_f64(), (1u64 << 40) as f64);
        assert_eq!(Numeric::from(200u8).to_f64(), 200.0);
        assert_eq!(Numeric::from(u32::MAX).to_f64(), 4_294_967_295.0);
        assert_eq!(Numeric::from(u64::MAX).to_f64(), 18_446_744_073_709_551_615.0);
        assert_eq!(Numeric::from(0.5f32).to_f64(), 0.5);
        assert_eq!(f64::from(Numeric::from(2.25f64)), 2.25);
    }

    #[test]
    fn test_parse() {
        assert_eq!("42".parse::<Numeric>(), Ok(Numeric::I64(42)));
        assert_eq!(" -7 ".parse::<Numeric>(), Ok(Numeric::I64(-7)));
        assert_eq!(
            "18446744073709551615".parse::<Numeric>(),
            Ok(Numeric::U64(u64::MAX))
        );
        assert_eq!("1.5e3".parse::<Numeric>(), Ok(Numeric::F64(1500.0)));
    }

    #[test]
    fn test_parse_rejects_text() {
        for text in ["I am an unknown data type", "", "NaN", "12abc"] {
            assert_eq!(
                text.parse::<Numeric>(),
                Err(StatsError::NonNumeric(text.to_string()))
            );
        }
    }
}
