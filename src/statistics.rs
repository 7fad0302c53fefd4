use std::fmt;

/// Running aggregates over a stream of integers.
///
/// Every query is O(1) and callable at any time, including before the first
/// value. `sum` and `product` wrap on overflow; see [`Statistics::overflowed`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statistics {
    count: u64,
    sum: i64,
    product: i64,
    // Sentinels: i64::MAX / i64::MIN until the first value arrives.
    min: i64,
    max: i64,
    overflowed: bool,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistics {
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: 0,
            product: 1,
            min: i64::MAX,
            max: i64::MIN,
            overflowed: false,
        }
    }

    /// Fold one value into the aggregates.
    ///
    /// A zero collapses the product to 0 for the rest of the stream.
    pub fn add(&mut self, value: i64) {
        self.count += 1;

        let (sum, sum_wrapped) = self.sum.overflowing_add(value);
        let (product, product_wrapped) = self.product.overflowing_mul(value);
        self.sum = sum;
        self.product = product;
        self.overflowed |= sum_wrapped || product_wrapped;

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn sum(&self) -> i64 {
        self.sum
    }

    pub fn product(&self) -> i64 {
        self.product
    }

    /// Smallest value seen, `None` before the first value.
    pub fn min(&self) -> Option<i64> {
        if self.count == 0 {
            None
        } else {
            Some(self.min)
        }
    }

    /// Largest value seen, `None` before the first value.
    pub fn max(&self) -> Option<i64> {
        if self.count == 0 {
            None
        } else {
            Some(self.max)
        }
    }

    /// Arithmetic mean, exactly `0.0` when nothing has been added.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }

    /// True once `sum` or `product` has wrapped around `i64`.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn summary(&self) -> Summary<'_> {
        Summary(self)
    }
}

impl Extend<i64> for Statistics {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<i64> for Statistics {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

/// The end-of-run report, one labelled line per aggregate.
pub struct Summary<'a>(&'a Statistics);

struct Extremum(Option<i64>);

impl fmt::Display for Extremum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("undefined"),
        }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.0;
        writeln!(f, "Number of values entered = {}", stats.count())?;
        writeln!(f, "Sum of all values        = {}", stats.sum())?;
        writeln!(f, "Product of all values    = {}", stats.product())?;
        writeln!(f, "Biggest value            = {}", Extremum(stats.max()))?;
        writeln!(f, "Smallest value           = {}", Extremum(stats.min()))?;
        writeln!(f, "Average of all values    = {:.2}", stats.average())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn collect(values: &[i32]) -> Statistics {
        values.iter().map(|&v| i64::from(v)).collect()
    }

    proptest! {
        #[test]
        fn count_sum_product(values in vec(any::<i32>(), 0..100)) {
            let stats = collect(&values);

            prop_assert_eq!(stats.count(), values.len() as u64);
            prop_assert_eq!(
                stats.sum(),
                values.iter().fold(0i64, |acc, &v| acc.wrapping_add(i64::from(v)))
            );
            prop_assert_eq!(
                stats.product(),
                values.iter().fold(1i64, |acc, &v| acc.wrapping_mul(i64::from(v)))
            );
        }

        #[test]
        fn min_max_match_iterator(values in vec(any::<i32>(), 0..100)) {
            let stats = collect(&values);

            prop_assert_eq!(stats.min(), values.iter().min().map(|&v| i64::from(v)));
            prop_assert_eq!(stats.max(), values.iter().max().map(|&v| i64::from(v)));
        }

        #[test]
        fn min_of_positives_is_not_zero(values in vec(1..i32::MAX, 1..100)) {
            let stats = collect(&values);
            prop_assert!(stats.min().is_some_and(|min| min > 0));
        }

        #[test]
        fn max_of_negatives_is_not_zero(values in vec(i32::MIN..0, 1..100)) {
            let stats = collect(&values);
            prop_assert!(stats.max().is_some_and(|max| max < 0));
        }

        #[test]
        fn average_is_sum_over_count(values in vec(any::<i32>(), 0..100)) {
            let stats = collect(&values);

            if values.is_empty() {
                prop_assert_eq!(stats.average(), 0.0);
            } else {
                // i32 inputs cannot wrap an i64 sum at this length.
                let sum: i64 = values.iter().map(|&v| i64::from(v)).sum();
                prop_assert_eq!(stats.average(), sum as f64 / values.len() as f64);
            }
        }
    }
}
