use std::cmp::Reverse;
use std::collections::BinaryHeap;

///
/// Bounded collection of the `capacity` largest values seen so far.
///
/// Backed by a min-heap: below capacity every value is pushed, at capacity a value
/// replaces the current minimum when it is not smaller than it. Equal values may evict
/// each other in any order, the kept multiset is always the `capacity` largest.
///
#[derive(Debug, Clone)]
pub struct TopK<T: Ord> {
    capacity: usize,
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> TopK<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: T) {
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(value));
        } else if let Some(mut min) = self.heap.peek_mut() {
            if value >= min.0 {
                *min = Reverse(value);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Consume the collection, largest value first.
    pub fn into_sorted_desc(self) -> Vec<T> {
        // ascending order of Reverse<T> is descending order of T
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(value)| value)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn top5(values: &[u32]) -> Vec<u32> {
        let mut top = TopK::new(5);
        for value in values {
            top.push(*value);
        }
        top.into_sorted_desc()
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![42], vec![42])]
    #[case(vec![100, 150, 120], vec![150, 120, 100])]
    #[case(vec![3, 3, 3, 3, 3, 3], vec![3, 3, 3, 3, 3])]
    #[case(vec![1, 9, 2, 8, 3, 7, 4, 6, 5], vec![9, 8, 7, 6, 5])]
    #[case(vec![10, 10, 1, 10, 2, 10, 10, 10], vec![10, 10, 10, 10, 10])]
    #[case(vec![5, 4, 4, 4, 4, 4, 1, 4], vec![5, 4, 4, 4, 4])]
    fn test_top5(#[case] values: Vec<u32>, #[case] expected: Vec<u32>) {
        assert_eq!(top5(&values), expected);
    }

    #[rstest]
    fn test_matches_sorted_reference() {
        let values: Vec<u32> = (0..2_000u64)
            .map(|i| ((i * 2654435761) % 997) as u32)
            .collect();

        let mut reference = values.clone();
        reference.sort_unstable_by(|a, b| b.cmp(a));
        reference.truncate(5);

        assert_eq!(top5(&values), reference);
    }

    #[rstest]
    fn test_zero_capacity_keeps_nothing() {
        let mut top = TopK::new(0);
        top.push(7u32);
        assert!(top.is_empty());
        assert_eq!(top.into_sorted_desc(), Vec::<u32>::new());
    }
}
