/// LIFO working storage for the flood-fill area estimator.
///
/// Coordinates are signed because the fill pushes neighbors one step outside
/// the scratch raster; those pop as out-of-range reads and are skipped.
/// Popping an empty stack is a programming error, not a recoverable state.
#[derive(Debug)]
pub(crate) struct PointStack {
    items: Vec<(i64, i64)>,
}

impl PointStack {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, x: i64, y: i64) {
        self.items.push((x, y));
    }

    pub(crate) fn pop(&mut self) -> (i64, i64) {
        self.items.pop().expect("point stack underflow")
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::PointStack;

    #[test]
    fn pops_in_lifo_order() {
        let mut stk = PointStack::with_capacity(4);
        stk.push(1, 2);
        stk.push(3, 4);

        assert_eq!(stk.pop(), (3, 4));
        assert_eq!(stk.pop(), (1, 2));
        assert!(stk.is_empty());
    }

    #[test]
    #[should_panic(expected = "point stack underflow")]
    fn pop_on_empty_panics() {
        let mut stk = PointStack::with_capacity(0);
        stk.pop();
    }
}
