//! Navigation state
//!
//! Owns the active index and keeps it valid:
//!
//! - `current` is `Some(i)` with `i < count` whenever `count > 0`
//! - `current` is `None` exactly when `count == 0`
//!
//! Resolution of relative targets (`Next`, `Previous`, ...) is pure; the
//! carousel decides whether a resolved change commits immediately or goes
//! through the transition engine.

/// Map any integer index into the valid range
///
/// With `infinite` the index wraps (`-1` is the last slide); otherwise it is
/// clamped to `0..count`. Returns `None` for an empty carousel.
pub fn normalize_index(index: isize, count: usize, infinite: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let n = count as isize;
    let normalized = if infinite {
        index.rem_euclid(n)
    } else {
        index.clamp(0, n - 1)
    };
    Some(normalized as usize)
}

/// Where a navigation request wants to go
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Previous,
    Next,
    First,
    Last,
    /// Absolute index, normalized before use
    Index(isize),
}

/// Active index plus slide count
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    current: Option<usize>,
    count: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn can_go_previous(&self, infinite: bool) -> bool {
        match self.current {
            Some(_) if infinite => true,
            Some(current) => current > 0,
            None => false,
        }
    }

    pub fn can_go_next(&self, infinite: bool) -> bool {
        match self.current {
            Some(_) if infinite => true,
            Some(current) => current + 1 < self.count,
            None => false,
        }
    }

    /// Resolve `target` relative to `baseline` (the current index if `None`)
    ///
    /// Returns the normalized destination, or `None` when the request changes
    /// nothing: fewer than two slides, or the destination equals the baseline.
    pub fn resolve(&self, target: NavTarget, infinite: bool, baseline: Option<usize>) -> Option<usize> {
        if self.count <= 1 {
            return None;
        }
        let base = baseline.or(self.current)?;

        let raw = match target {
            NavTarget::Previous => base as isize - 1,
            NavTarget::Next => base as isize + 1,
            NavTarget::First => 0,
            NavTarget::Last => self.count as isize - 1,
            NavTarget::Index(index) => index,
        };

        normalize_index(raw, self.count, infinite).filter(|&index| index != base)
    }

    /// Make `index` the active slide, returning the previous one
    ///
    /// Indices outside the range are clamped.
    pub fn commit(&mut self, index: usize) -> Option<usize> {
        let previous = self.current;
        self.current = normalize_index(index as isize, self.count, false);
        previous
    }

    /// A slide was inserted at `index`
    pub fn on_inserted(&mut self, index: usize) {
        self.count += 1;
        self.current = match self.current {
            None => Some(0),
            Some(current) if index <= current => Some(current + 1),
            other => other,
        };
    }

    /// The slide at `index` was removed
    ///
    /// Removing the active slide selects the slide that moved into its
    /// position, or the new last slide if it was the last one.
    pub fn on_removed(&mut self, index: usize) {
        if index >= self.count {
            return;
        }
        self.count -= 1;
        self.current = match self.current {
            _ if self.count == 0 => None,
            Some(current) if index < current => Some(current - 1),
            Some(current) if index == current => Some(current.min(self.count - 1)),
            other => other,
        };
    }

    pub fn on_cleared(&mut self) {
        self.count = 0;
        self.current = None;
    }
}
