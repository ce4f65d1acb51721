//! Partitioning ordered sequences into maximal runs of adjacent items.
//!
//! Two strategies share one boundary rule: an item joins the current run when
//! `same(previous, item)` holds for the item right before it.
//!
//! - [`ConsecutiveGroups`] materializes each run as a `Vec` before moving on.
//! - [`StreamingGroups`] hands out each run as a borrowed [`Group`] iterator,
//!   so a run can be consumed while it is still being pulled from upstream.
//!   It buffers at most one item ahead.

use std::iter::Peekable;

/// Sources that can conditionally yield their next item.
pub trait Lookahead: Iterator {
    /// Yield the next item only if `pred` accepts it; otherwise keep it for later.
    fn next_if(&mut self, pred: impl FnOnce(&Self::Item) -> bool) -> Option<Self::Item>;
}

impl<I: Iterator> Lookahead for Peekable<I> {
    fn next_if(&mut self, pred: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
        Peekable::next_if(self, pred)
    }
}

/// Take one maximal run from `src`, or `None` if `src` is exhausted.
pub fn take_run<L, F>(src: &mut L, same: F) -> Option<Vec<L::Item>>
where
    L: Lookahead,
    F: Fn(&L::Item, &L::Item) -> bool,
{
    let first = src.next()?;
    let mut run = vec![first];
    while let Some(item) = src.next_if(|item| run.last().is_some_and(|prev| same(prev, item))) {
        run.push(item);
    }
    Some(run)
}

/// Eager grouping adapter, see [`group_consecutive`].
pub struct ConsecutiveGroups<I: Iterator, F> {
    iter: Peekable<I>,
    same: F,
}

/// Group `iter` into maximal runs where `same(prev, curr)` holds between neighbours.
///
/// An empty input yields no groups.
pub fn group_consecutive<I, F>(iter: I, same: F) -> ConsecutiveGroups<I::IntoIter, F>
where
    I: IntoIterator,
    F: Fn(&I::Item, &I::Item) -> bool,
{
    ConsecutiveGroups {
        iter: iter.into_iter().peekable(),
        same,
    }
}

impl<I, F> Iterator for ConsecutiveGroups<I, F>
where
    I: Iterator,
    F: Fn(&I::Item, &I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        take_run(&mut self.iter, &self.same)
    }
}

/// Streaming grouper over a single pass of `iter`.
///
/// Not an [`Iterator`] itself: each [`Group`] borrows the grouper, so only one
/// group is live at a time. Asking for the next group skips whatever the
/// caller left unread in the current one.
pub struct StreamingGroups<I: Iterator, F> {
    iter: I,
    same: F,
    /// One item pulled from upstream but not yet handed out.
    pending: Option<I::Item>,
    /// Last item handed out from the open group.
    last: Option<I::Item>,
    open: bool,
}

impl<I, F> StreamingGroups<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: Fn(&I::Item, &I::Item) -> bool,
{
    pub fn new(iter: I, same: F) -> Self {
        StreamingGroups {
            iter,
            same,
            pending: None,
            last: None,
            open: false,
        }
    }

    /// Close the open group (draining it) and open the next one.
    pub fn next_group(&mut self) -> Option<Group<'_, I, F>> {
        while self.open {
            self.pull_if(|_| true);
        }
        let head = self.pending.take().or_else(|| self.iter.next())?;
        self.pending = Some(head);
        self.last = None;
        self.open = true;
        Some(Group { parent: self })
    }

    /// The group currently open, if any item of it remains unread.
    pub fn current_group(&mut self) -> Option<Group<'_, I, F>> {
        if self.open {
            Some(Group { parent: self })
        } else {
            None
        }
    }

    fn pull_if(&mut self, pred: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
        if !self.open {
            return None;
        }
        let Some(candidate) = self.pending.take().or_else(|| self.iter.next()) else {
            self.open = false;
            return None;
        };
        if let Some(last) = &self.last
            && !(self.same)(last, &candidate)
        {
            self.pending = Some(candidate);
            self.open = false;
            return None;
        }
        if !pred(&candidate) {
            self.pending = Some(candidate);
            return None;
        }
        self.last = Some(candidate.clone());
        Some(candidate)
    }
}

/// One run of a [`StreamingGroups`], read lazily from upstream.
pub struct Group<'a, I: Iterator, F> {
    parent: &'a mut StreamingGroups<I, F>,
}

impl<I, F> Iterator for Group<'_, I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: Fn(&I::Item, &I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.parent.pull_if(|_| true)
    }
}

impl<I, F> Lookahead for Group<'_, I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: Fn(&I::Item, &I::Item) -> bool,
{
    fn next_if(&mut self, pred: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
        self.parent.pull_if(pred)
    }
}
