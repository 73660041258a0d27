//! Mixed-radix counter used to walk Cartesian search spaces.
//!
//! Each digit counts from `0` up to `radix - 1`. Advancing increments the
//! least-significant (first) digit; a digit that overflows resets to `0` and
//! carries into the next one. Once the last digit overflows the counter has
//! wrapped around to all zeros and every state has been visited exactly once.

/// One counter digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit {
    pub value: usize,
    pub radix: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedRadixCounter {
    digits: Vec<Digit>,
}

impl MixedRadixCounter {
    /// Creates a counter at state zero.
    ///
    /// # Example
    ///
    /// ```
    /// use puzzlers::counter::MixedRadixCounter;
    ///
    /// let mut counter = MixedRadixCounter::new(&[2, 3]);
    /// assert_eq!(counter.values(), vec![0, 0]);
    /// assert!(!counter.advance());
    /// assert_eq!(counter.values(), vec![1, 0]);
    /// assert!(!counter.advance());
    /// assert_eq!(counter.values(), vec![0, 1]);
    /// ```
    pub fn new(radices: &[usize]) -> Self {
        MixedRadixCounter {
            digits: radices
                .iter()
                .map(|&radix| Digit { value: 0, radix })
                .collect(),
        }
    }

    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    pub fn values(&self) -> Vec<usize> {
        self.digits.iter().map(|d| d.value).collect()
    }

    /// A counter with a zero-radix digit has no valid state.
    pub fn is_empty(&self) -> bool {
        self.digits.iter().any(|d| d.radix == 0)
    }

    /// Number of distinct states, or `None` if it does not fit in a `u128`.
    pub fn state_count(&self) -> Option<u128> {
        self.digits
            .iter()
            .try_fold(1u128, |acc, d| acc.checked_mul(d.radix as u128))
    }

    /// Moves to the next state. Returns `true` when the counter wrapped
    /// around, meaning the previous state was the last one.
    pub fn advance(&mut self) -> bool {
        for digit in &mut self.digits {
            if digit.value + 1 < digit.radix {
                digit.value += 1;
                return false;
            }
            digit.value = 0;
        }
        true
    }

    pub fn reset(&mut self) {
        for digit in &mut self.digits {
            digit.value = 0;
        }
    }

    /// Iterates over every state, starting from zero.
    ///
    /// The iterator owns its own copy of the counter, so it can be created
    /// again to restart the walk.
    ///
    /// ```
    /// use puzzlers::counter::MixedRadixCounter;
    ///
    /// let counter = MixedRadixCounter::new(&[2, 2]);
    /// let states: Vec<_> = counter.assignments().collect();
    /// assert_eq!(states, vec![vec![0, 0], vec![1, 0], vec![0, 1], vec![1, 1]]);
    /// ```
    pub fn assignments(&self) -> Assignments {
        let mut counter = self.clone();
        counter.reset();
        Assignments {
            done: counter.is_empty(),
            counter,
        }
    }
}

/// Lazy iterator over the states of a [`MixedRadixCounter`].
#[derive(Debug, Clone)]
pub struct Assignments {
    counter: MixedRadixCounter,
    done: bool,
}

impl Iterator for Assignments {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.counter.values();
        self.done = self.counter.advance();
        Some(current)
    }
}
