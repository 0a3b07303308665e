//! Index keys.

use std::fmt;

/// A value stored in an index, totally ordered.
///
/// Values of different kinds compare by kind first, in declaration order, so
/// `MinValue` sorts before every concrete key and `MaxValue` after every one.
/// The two extremes are reserved for the head and tail sentinels and double
/// as open bounds in range predicates.
///
/// # Example
/// ```
/// use skipscan::IndexKey;
///
/// assert!(IndexKey::MinValue < IndexKey::Null);
/// assert!(IndexKey::from(5) < IndexKey::from("a"));
/// assert!(IndexKey::from(true) < IndexKey::MaxValue);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IndexKey {
    /// Lower extreme; key of the head sentinel.
    MinValue,
    Null,
    Int(i64),
    String(String),
    Binary(Vec<u8>),
    Boolean(bool),
    /// Upper extreme; key of the tail sentinel.
    MaxValue,
}

impl IndexKey {
    #[inline]
    pub fn is_min_value(&self) -> bool {
        matches!(self, IndexKey::MinValue)
    }

    #[inline]
    pub fn is_max_value(&self) -> bool {
        matches!(self, IndexKey::MaxValue)
    }

    /// True for `MinValue` and `MaxValue`.
    #[inline]
    pub fn is_extreme(&self) -> bool {
        self.is_min_value() || self.is_max_value()
    }
}

impl fmt::Display for IndexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKey::MinValue => write!(f, "MinValue"),
            IndexKey::Null => write!(f, "null"),
            IndexKey::Int(v) => write!(f, "{}", v),
            IndexKey::String(s) => write!(f, "\"{}\"", s),
            IndexKey::Binary(b) => {
                write!(f, "0x")?;
                for byte in b {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
            IndexKey::Boolean(b) => write!(f, "{}", b),
            IndexKey::MaxValue => write!(f, "MaxValue"),
        }
    }
}

impl From<i64> for IndexKey {
    fn from(v: i64) -> Self {
        IndexKey::Int(v)
    }
}

impl From<i32> for IndexKey {
    fn from(v: i32) -> Self {
        IndexKey::Int(v as i64)
    }
}

impl From<&str> for IndexKey {
    fn from(v: &str) -> Self {
        IndexKey::String(v.to_string())
    }
}

impl From<String> for IndexKey {
    fn from(v: String) -> Self {
        IndexKey::String(v)
    }
}

impl From<bool> for IndexKey {
    fn from(v: bool) -> Self {
        IndexKey::Boolean(v)
    }
}

impl From<Vec<u8>> for IndexKey {
    fn from(v: Vec<u8>) -> Self {
        IndexKey::Binary(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes_bracket_everything() {
        let keys = [
            IndexKey::Null,
            IndexKey::from(i64::MIN),
            IndexKey::from(i64::MAX),
            IndexKey::from(""),
            IndexKey::from(vec![0xffu8; 8]),
            IndexKey::from(false),
            IndexKey::from(true),
        ];
        for key in &keys {
            assert!(IndexKey::MinValue < *key, "{} should be above MinValue", key);
            assert!(*key < IndexKey::MaxValue, "{} should be below MaxValue", key);
        }
    }

    #[test]
    fn test_same_kind_ordering() {
        assert!(IndexKey::from(-3) < IndexKey::from(2));
        assert!(IndexKey::from("abc") < IndexKey::from("abd"));
        assert!(IndexKey::from(false) < IndexKey::from(true));
    }

    #[test]
    fn test_display() {
        assert_eq!(IndexKey::from(7).to_string(), "7");
        assert_eq!(IndexKey::from("x").to_string(), "\"x\"");
        assert_eq!(IndexKey::from(vec![0x0a, 0xff]).to_string(), "0x0aff");
        assert_eq!(IndexKey::MinValue.to_string(), "MinValue");
    }

    #[test]
    fn test_is_extreme() {
        assert!(IndexKey::MinValue.is_extreme());
        assert!(IndexKey::MaxValue.is_extreme());
        assert!(!IndexKey::Null.is_extreme());
    }
}
