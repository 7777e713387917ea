use std::iter::FusedIterator;

/// Counts down from `start` to zero, inclusive.
///
/// Every call to `into_iter` hands out a fresh iterator, so the same
/// `Countdown` can be walked any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub start: u32,
}

impl Countdown {
    pub fn new(start: u32) -> Self {
        Countdown { start }
    }

    pub fn iter(&self) -> CountdownIter {
        CountdownIter {
            current: Some(self.start),
        }
    }
}

impl IntoIterator for Countdown {
    type Item = u32;
    type IntoIter = CountdownIter;

    fn into_iter(self) -> CountdownIter {
        self.iter()
    }
}

impl IntoIterator for &Countdown {
    type Item = u32;
    type IntoIter = CountdownIter;

    fn into_iter(self) -> CountdownIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct CountdownIter {
    // `None` once zero has been yielded.
    current: Option<u32>,
}

impl Iterator for CountdownIter {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let value = self.current?;
        self.current = value.checked_sub(1);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.current.map_or(0, |c| c as usize + 1);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CountdownIter {}

impl FusedIterator for CountdownIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_zero_inclusive() {
        let values: Vec<_> = Countdown::new(5).into_iter().collect();
        assert_eq!(values, vec![5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_zero_start_yields_single_zero() {
        let mut iter = Countdown::new(0).into_iter();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_exhausted_iterator_stays_exhausted() {
        let countdown = Countdown::new(2);
        let mut iter = countdown.iter();
        assert_eq!(iter.by_ref().count(), 3);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        // A fresh iterator starts over.
        assert_eq!((&countdown).into_iter().next(), Some(2));
    }

    #[test]
    fn test_len_matches_remaining_values() {
        let mut iter = Countdown::new(3).iter();
        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.len(), 3);
        iter.by_ref().for_each(drop);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_strictly_decreasing() {
        let values: Vec<_> = Countdown::new(50).into_iter().collect();
        assert_eq!(values.len(), 51);
        assert!(values.windows(2).all(|w| w[0] == w[1] + 1));
        assert_eq!(values.last(), Some(&0));
    }
}
