use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use crate::Dataset;

/// Sequential access to a stream of dataset items.
///
/// Unlike [Dataset](crate::Dataset), a sequential source owns a cursor and
/// hands out items strictly in order. Every call to [next_item](Self::next_item)
/// advances that cursor, so reads are not idempotent: two callers sharing one
/// source race on which items each of them receives. Single-caller access is
/// assumed; no synchronization beyond per-fetch locking is provided.
pub trait SequentialSource<I>: Send + Sync {
    /// Gets the total number of items the source started with.
    fn len(&self) -> usize;

    /// Checks if the source started empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the next item and advances the cursor, or `None` once the
    /// source is exhausted.
    fn next_item(&self) -> Option<I>;
}

impl<S, I> SequentialSource<I> for Arc<S>
where
    S: SequentialSource<I>,
{
    fn len(&self) -> usize {
        self.as_ref().len()
    }

    fn next_item(&self) -> Option<I> {
        self.as_ref().next_item()
    }
}

impl<I> SequentialSource<I> for Arc<dyn SequentialSource<I>> {
    fn len(&self) -> usize {
        self.as_ref().len()
    }

    fn next_item(&self) -> Option<I> {
        self.as_ref().next_item()
    }
}

impl<I> SequentialSource<I> for Box<dyn SequentialSource<I>> {
    fn len(&self) -> usize {
        self.as_ref().len()
    }

    fn next_item(&self) -> Option<I> {
        self.as_ref().next_item()
    }
}

/// Adapts any indexable [Dataset] into a [SequentialSource] by walking it
/// front to back with an explicit cursor.
pub struct CursorSource<D, I> {
    dataset: D,
    cursor: Mutex<usize>,
    item: PhantomData<I>,
}

impl<D, I> CursorSource<D, I>
where
    D: Dataset<I>,
{
    /// Creates a new source with the cursor at the first item.
    pub fn new(dataset: D) -> Self {
        Self {
            dataset,
            cursor: Mutex::new(0),
            item: PhantomData,
        }
    }

    /// Returns the current cursor position, i.e. how many items were consumed.
    pub fn position(&self) -> usize {
        *self.cursor.lock().unwrap()
    }
}

impl<D, I> SequentialSource<I> for CursorSource<D, I>
where
    D: Dataset<I>,
    I: Send + Sync,
{
    fn len(&self) -> usize {
        self.dataset.len()
    }

    fn next_item(&self) -> Option<I> {
        let mut cursor = self.cursor.lock().unwrap();
        let item = self.dataset.get(*cursor)?;
        *cursor += 1;

        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_data, InMemDataset};

    #[test]
    fn next_item_walks_the_dataset_once() {
        let items = test_data::tensor_pairs(3, &[2]);
        let source = CursorSource::new(InMemDataset::new(items.clone()));

        assert_eq!(source.len(), 3);
        for expected in &items {
            assert_eq!(source.next_item().as_ref(), Some(expected));
        }
        assert_eq!(source.next_item(), None);
        // Exhaustion is permanent.
        assert_eq!(source.next_item(), None);
    }

    #[test]
    fn position_tracks_consumed_items() {
        let source = CursorSource::new(InMemDataset::new(test_data::tensor_pairs(2, &[1])));

        assert_eq!(source.position(), 0);
        source.next_item();
        assert_eq!(source.position(), 1);
        source.next_item();
        assert_eq!(source.position(), 2);
    }

    #[test]
    fn len_is_not_affected_by_consumption() {
        let source = CursorSource::new(InMemDataset::new(test_data::tensor_pairs(4, &[1])));

        source.next_item();
        source.next_item();

        assert_eq!(source.len(), 4);
    }
}
