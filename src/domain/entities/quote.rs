use serde::{Deserialize, Serialize};

/// Price snapshot in the quote provider's field vocabulary: current price,
/// absolute change, percent change, previous close. Provider values are
/// passed through verbatim; absent fields deserialize to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Current price
    #[serde(default)]
    pub c: f64,
    /// Absolute change
    #[serde(default)]
    pub d: f64,
    /// Percent change
    #[serde(default)]
    pub dp: f64,
    /// Previous close
    #[serde(default)]
    pub pc: f64,
}

impl Quote {
    /// A quote is usable when its current price is a finite number above zero.
    pub fn is_priced(&self) -> bool {
        self.c.is_finite() && self.c > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priced_rejects_zero_and_non_finite() {
        let mut q = Quote {
            c: 101.5,
            d: 1.5,
            dp: 1.5,
            pc: 100.0,
        };
        assert!(q.is_priced());

        q.c = 0.0;
        assert!(!q.is_priced());

        q.c = f64::NAN;
        assert!(!q.is_priced());

        q.c = -3.0;
        assert!(!q.is_priced());
    }
}
