/// A set of integers in `0..capacity` backed by a flag per value.
/// Iteration is always in ascending order.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RangeSet {
    len: usize,
    flags: Vec<bool>,
}

impl RangeSet {
    pub fn with_all(capacity: usize) -> RangeSet {
        RangeSet {
            len: capacity,
            flags: vec![true; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[cfg(test)]
    pub fn remove(&mut self, n: usize) -> bool {
        match self.flags.get_mut(n) {
            Some(flag) if *flag => {
                *flag = false;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Removes every value for which `f` returns false. Returns the number of values removed.
    pub fn retain(&mut self, mut f: impl FnMut(usize) -> bool) -> usize {
        let mut removed = 0;
        for (n, flag) in self.flags.iter_mut().enumerate() {
            if *flag && !f(n) {
                *flag = false;
                removed += 1;
            }
        }
        self.len -= removed;
        removed
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            flags: &self.flags,
            index: 0,
            remaining: self.len,
        }
    }
}

pub(crate) struct Iter<'a> {
    flags: &'a [bool],
    index: usize,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let offset = self.flags[self.index..].iter().position(|&flag| flag)?;
        let n = self.index + offset;
        self.index = n + 1;
        self.remaining -= 1;
        Some(n)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
