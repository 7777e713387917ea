use std::slice::Iter;

/// A last-in-first-out collection of items of a single type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty stack.
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Adds an item to the top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item from the stack.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the number of items in the stack.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// Returns `true` if `item` is on top of the stack.
    pub fn is_top(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.peek().is_some_and(|top| top == item)
    }

    /// Returns a new stack holding the top `size` items, in the same order.
    pub fn suffix(&self, size: usize) -> Stack<T>
    where
        T: Clone,
    {
        let start = self.count().saturating_sub(size);
        self.items[start..].iter().cloned().collect()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

// The last element of the vector becomes the top.
impl<T> From<Vec<T>> for Stack<T> {
    fn from(items: Vec<T>) -> Self {
        Stack { items }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

/// An indexable collection that can grow at the end.
///
/// `Vec` has an inherent `append`, so on a `Vec` call this one as
/// `Container::append(&mut v, item)`.
pub trait Container {
    type Item;

    fn append(&mut self, item: Self::Item);

    fn count(&self) -> usize;

    /// Index 0 is the first item appended.
    fn get(&self, index: usize) -> Option<&Self::Item>;
}

impl<T> Container for Stack<T> {
    type Item = T;

    fn append(&mut self, item: T) {
        self.push(item);
    }

    fn count(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }
}

impl<T> Container for Vec<T> {
    type Item = T;

    fn append(&mut self, item: T) {
        self.push(item);
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

/// Checks whether two containers hold equal items in the same order.
pub fn all_items_match<C1, C2>(left: &C1, right: &C2) -> bool
where
    C1: Container,
    C2: Container<Item = C1::Item>,
    C1::Item: PartialEq,
{
    if left.count() != right.count() {
        return false;
    }

    (0..left.count()).all(|i| left.get(i) == right.get(i))
}

/// Mean of an integer container, `None` when it is empty.
pub fn average<C>(container: &C) -> Option<f64>
where
    C: Container<Item = i64>,
{
    let count = container.count();
    if count == 0 {
        return None;
    }

    let sum: f64 = (0..count)
        .filter_map(|i| container.get(i))
        .map(|&value| value as f64)
        .sum();
    Some(sum / count as f64)
}

/// Checks whether the last item of the container equals `item`.
pub fn ends_with<C>(container: &C, item: &C::Item) -> bool
where
    C: Container,
    C::Item: PartialEq,
{
    container
        .count()
        .checked_sub(1)
        .and_then(|last| container.get(last))
        .is_some_and(|last| last == item)
}
