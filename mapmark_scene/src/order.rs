// Copyright 2025 the Mapmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw-order stack with O(1) position lookup.

use core::hash::Hash;

use hashbrown::HashMap;

/// Stack of drawn items, bottom first.
///
/// Alongside the stack, a map from item to stack position answers
/// [`position`](Self::position) in constant time. Removal shifts every later
/// item down by one, keeping the relative order intact.
#[derive(Clone, Debug)]
pub(crate) struct DrawOrder<K> {
    stack: Vec<K>,
    positions: HashMap<K, usize>,
}

impl<K> Default for DrawOrder<K> {
    fn default() -> Self {
        Self {
            stack: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> DrawOrder<K> {
    pub(crate) fn as_slice(&self) -> &[K] {
        &self.stack
    }

    pub(crate) fn len(&self) -> usize {
        self.stack.len()
    }

    pub(crate) fn position(&self, key: K) -> Option<usize> {
        self.positions.get(&key).copied()
    }

    /// Puts `key` on top; an item already in the stack is moved there.
    pub(crate) fn push(&mut self, key: K) {
        self.remove(key);
        self.positions.insert(key, self.stack.len());
        self.stack.push(key);
    }

    /// Removes `key`, returning its former position.
    pub(crate) fn remove(&mut self, key: K) -> Option<usize> {
        let at = self.positions.remove(&key)?;
        self.stack.remove(at);
        for (i, k) in self.stack.iter().enumerate().skip(at) {
            self.positions.insert(*k, i);
        }
        Some(at)
    }

    pub(crate) fn clear(&mut self) {
        self.stack.clear();
        self.positions.clear();
    }
}
