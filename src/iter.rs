use core::iter::FusedIterator;

use crate::RingQueue;

/// Borrowing iterator over a [`RingQueue`], head first.
///
/// Holding it borrows the queue, so the queue can't change underneath it.
#[derive(Clone)]
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    head: usize,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    fn at(&self, index: usize) -> Option<&'a T> {
        let slots = self.slots;
        slots[(self.head + index) % slots.len()].as_ref()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let x = self.at(self.front);
        self.front += 1;
        x
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        self.at(self.back)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Owning iterator that dequeues until the queue is empty.
pub struct IntoIter<T>(RingQueue<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> RingQueue<T> {
    /// Iterates the queued elements, head first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.slots(),
            head: self.head(),
            front: 0,
            back: self.len(),
        }
    }
}

impl<T> IntoIterator for RingQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for RingQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut q = RingQueue::new();
        q.extend(iter);
        q
    }
}

impl<T> Extend<T> for RingQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.push(x);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn iter_in_order() {
        let q: RingQueue<i32> = [1, 2, 3].into_iter().collect();
        let v: Vec<_> = q.iter().copied().collect();
        assert_eq!(v, vec![1, 2, 3]);
        assert_eq!(q.iter().len(), 3);
    }

    #[test]
    fn iter_empty() {
        let q: RingQueue<i32> = RingQueue::new();
        let mut it = q.iter();
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn iter_wrapped() {
        let mut q: RingQueue<i32> = [1, 2, 3, 4].into_iter().collect();
        q.dequeue().unwrap();
        q.dequeue().unwrap();
        q.extend([5, 6]);
        assert_eq!(q.capacity(), 4);

        let v: Vec<_> = q.iter().copied().collect();
        assert_eq!(v, vec![3, 4, 5, 6]);

        let r: Vec<_> = q.iter().rev().copied().collect();
        assert_eq!(r, vec![6, 5, 4, 3]);
    }

    #[test]
    fn iter_both_ends() {
        let q: RingQueue<i32> = (1..=5).collect();
        let mut it = q.iter();
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next(), Some(&3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn for_loop_by_ref() {
        let q: RingQueue<i32> = (1..=3).collect();
        let mut sum = 0;
        for x in &q {
            sum += *x;
        }
        assert_eq!(sum, 6);
    }

    #[test]
    fn into_iter_drains() {
        let mut q: RingQueue<String> = RingQueue::new();
        q.extend(["a", "b", "c"].iter().map(|s| s.to_string()));
        q.dequeue().unwrap();
        q.enqueue("d".to_string()).unwrap();

        let it = q.into_iter();
        assert_eq!(it.len(), 3);
        let v: Vec<_> = it.collect();
        assert_eq!(v, vec!["b", "c", "d"]);
    }

    #[test]
    fn collect_grows() {
        let q: RingQueue<u8> = (0..9).collect();
        assert_eq!(q.len(), 9);
        assert_eq!(q.capacity(), 16);
        assert_eq!(q.to_vec(), (0..9).collect::<Vec<_>>());
    }
}
