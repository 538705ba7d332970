// src/dag/ready_set.rs

//! Priority-ordered set of tasks whose dependencies are all scheduled.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::types::{DueDate, compare_due};

/// Sort key for the ready set: due date ascending (missing last), then title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyKey<'a> {
    pub due: Option<DueDate>,
    pub title: &'a str,
}

impl Ord for ReadyKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // `str` ordering is byte-wise, i.e. ordinal.
        compare_due(self.due, other.due).then_with(|| self.title.cmp(other.title))
    }
}

impl PartialOrd for ReadyKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ready tasks with O(log k) insert and extract-min.
#[derive(Debug, Default)]
pub struct ReadySet<'a> {
    keys: BTreeSet<ReadyKey<'a>>,
}

impl<'a> ReadySet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the title was already present.
    pub fn insert(&mut self, title: &'a str, due: Option<DueDate>) -> bool {
        self.keys.insert(ReadyKey { due, title })
    }

    /// Remove and return the task that should run next.
    pub fn pop_first(&mut self) -> Option<ReadyKey<'a>> {
        self.keys.pop_first()
    }

    pub fn peek(&self) -> Option<&ReadyKey<'a>> {
        self.keys.first()
    }

    /// Titles in extraction order, without removing them.
    pub fn titles(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.keys.iter().map(|k| k.title)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
