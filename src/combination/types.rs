/// A normalized multiset of modifiers representing one candidate sum
///
/// The values are kept sorted ascending, so two construction orders of the
/// same multiset compare equal and order lexicographically. Candidate sets
/// scan in that lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Combination {
    values: Vec<i64>,
}

impl Combination {
    /// Create a combination from values in any order
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        let mut values: Vec<i64> = values.into_iter().collect();
        values.sort_unstable();
        Self { values }
    }

    /// Create a combination of a single modifier
    pub fn single(value: i64) -> Self {
        Self {
            values: vec![value],
        }
    }

    /// Create a combination of `count` copies of `value`
    pub fn repeated(value: i64, count: usize) -> Self {
        Self {
            values: vec![value; count],
        }
    }

    /// A copy of this combination extended by one modifier, re-normalized
    pub fn with(&self, value: i64) -> Self {
        let mut values = self.values.clone();
        values.push(value);
        values.sort_unstable();
        Self { values }
    }

    pub fn sum(&self) -> i64 {
        self.values.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The modifiers of this combination, sorted ascending
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<i64> {
        self.values
    }
}
