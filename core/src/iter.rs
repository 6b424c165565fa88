//! Iteration over a phrasebook's entries.

use std::slice;

use crate::{Phrasebook, model::Entry};

/// An iterator over a [`Phrasebook`]'s entries.
///
/// Returned by [`Phrasebook::iter`].
#[derive(Debug)]
pub struct EntryIter<'a>(pub(crate) slice::Iter<'a, Entry>);

impl<'a> Iterator for EntryIter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl ExactSizeIterator for EntryIter<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl DoubleEndedIterator for EntryIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

#[cfg(feature = "rayon")]
pub(crate) mod rayon {
    use rayon::iter::{
        IndexedParallelIterator, ParallelIterator,
        plumbing::{
            Consumer, Producer, ProducerCallback, UnindexedConsumer, bridge,
        },
    };

    use super::{Entry, EntryIter, Phrasebook};

    /// A [`rayon`]-powered parallel iterator over a [`Phrasebook`]'s entries.
    ///
    /// Returned by [`Phrasebook::par_iter`].
    #[derive(Debug)]
    pub struct ParEntryIter<'a>(&'a [Entry]);

    impl<'a> ParallelIterator for ParEntryIter<'a> {
        type Item = &'a Entry;

        fn drive_unindexed<C>(self, consumer: C) -> C::Result
        where
            C: UnindexedConsumer<Self::Item>,
        {
            bridge(self, consumer)
        }

        fn opt_len(&self) -> Option<usize> {
            Some(self.0.len())
        }
    }

    impl<'a> Producer for ParEntryIter<'a> {
        type IntoIter = EntryIter<'a>;
        type Item = &'a Entry;

        fn into_iter(self) -> Self::IntoIter {
            EntryIter(self.0.iter())
        }

        fn split_at(self, index: usize) -> (Self, Self) {
            let (left, right) = self.0.split_at(index);
            (ParEntryIter(left), ParEntryIter(right))
        }
    }

    impl IndexedParallelIterator for ParEntryIter<'_> {
        fn len(&self) -> usize {
            self.0.len()
        }

        fn drive<C: Consumer<Self::Item>>(self, consumer: C) -> C::Result {
            bridge(self, consumer)
        }

        fn with_producer<CB>(self, callback: CB) -> CB::Output
        where
            CB: ProducerCallback<Self::Item>,
        {
            callback.callback(self)
        }
    }

    impl<'a> rayon::iter::IntoParallelIterator for &'a Phrasebook {
        type Item = &'a Entry;
        type Iter = ParEntryIter<'a>;

        fn into_par_iter(self) -> Self::Iter {
            ParEntryIter(&self.entries)
        }
    }

    impl Phrasebook {
        /// Iterate through the entries in parallel with `rayon`.
        pub fn par_iter(&self) -> ParEntryIter<'_> {
            ParEntryIter(&self.entries)
        }
    }
}
