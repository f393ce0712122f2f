use std::fmt;


/// A single feature value.
/// The kind of a value is decided once, when the data is loaded,
/// and split rules dispatch on it.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    /// A number. Split rules compare numbers with `>=`.
    Numeric(f64),
    /// Any other value. Split rules compare these with `==`.
    Categorical(String),
}


impl FeatureValue {
    /// Returns `true` if `self` is a `FeatureValue::Numeric`.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }


    /// Returns the inner number, if any.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(x) => Some(*x),
            Self::Categorical(_) => None,
        }
    }


    /// Name of the value kind, used in error messages.
    #[inline]
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Numeric(_) => "numeric",
            Self::Categorical(_) => "categorical",
        }
    }


    /// Parse a raw cell into a numeric value.
    /// Returns `None` if `cell` is not a number.
    #[inline]
    pub(crate) fn parse_numeric(cell: &str) -> Option<Self> {
        cell.trim()
            .parse::<f64>()
            .ok()
            .filter(|x| x.is_finite())
            .map(Self::Numeric)
    }
}


impl From<f64> for FeatureValue {
    #[inline]
    fn from(x: f64) -> Self {
        Self::Numeric(x)
    }
}


impl From<i64> for FeatureValue {
    #[inline]
    fn from(x: i64) -> Self {
        Self::Numeric(x as f64)
    }
}


impl From<i32> for FeatureValue {
    #[inline]
    fn from(x: i32) -> Self {
        Self::Numeric(x as f64)
    }
}


impl From<&str> for FeatureValue {
    #[inline]
    fn from(x: &str) -> Self {
        Self::Categorical(x.to_string())
    }
}


impl From<String> for FeatureValue {
    #[inline]
    fn from(x: String) -> Self {
        Self::Categorical(x)
    }
}


impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(x) => write!(f, "{x}"),
            Self::Categorical(s) => write!(f, "{s}"),
        }
    }
}


/// Hashable identity of a `FeatureValue`.
/// Two numeric values share a key iff they compare equal,
/// so `0.0` and `-0.0` collapse to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ValueKey<'a> {
    Numeric(u64),
    Categorical(&'a str),
}


impl<'a> From<&'a FeatureValue> for ValueKey<'a> {
    #[inline]
    fn from(value: &'a FeatureValue) -> Self {
        match value {
            FeatureValue::Numeric(x) => {
                let x = if *x == 0.0 { 0.0 } else { *x };
                ValueKey::Numeric(x.to_bits())
            },
            FeatureValue::Categorical(s) => ValueKey::Categorical(s),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn parse_numeric_cells() {
        assert_eq!(
            FeatureValue::parse_numeric(" 3 "),
            Some(FeatureValue::Numeric(3.0))
        );
        assert_eq!(FeatureValue::parse_numeric("abc"), None);
        assert_eq!(FeatureValue::parse_numeric("NaN"), None);
    }


    #[test]
    fn signed_zeros_share_a_key() {
        let a = FeatureValue::Numeric(0.0);
        let b = FeatureValue::Numeric(-0.0);
        let keys = [ValueKey::from(&a), ValueKey::from(&b)]
            .into_iter()
            .collect::<HashSet<_>>();
        assert_eq!(keys.len(), 1);
    }


    #[test]
    fn display_integral_numbers_without_fraction() {
        assert_eq!(FeatureValue::from(5).to_string(), "5");
        assert_eq!(FeatureValue::from("red").to_string(), "red");
    }
}
