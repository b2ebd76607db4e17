// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node lookups.

use alloc::vec::Vec;
use kurbo::Rect;

/// Logical structure of the host's node tree.
///
/// Parent chains must be acyclic.
pub trait NodeTree<K> {
    /// Returns the logical parent of `node`, or `None` for a root.
    ///
    /// Hosts that render overlays into a portal should report the portal
    /// owner here so that content still counts as inside its owner.
    fn parent_of(&self, node: &K) -> Option<K>;

    /// Returns `true` while `node` is attached to the live document.
    fn is_connected(&self, node: &K) -> bool;

    /// Returns `true` if `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &K, node: &K) -> bool
    where
        K: Clone + PartialEq,
    {
        let mut cur = Some(node.clone());
        while let Some(n) = cur {
            if n == *ancestor {
                return true;
            }
            cur = self.parent_of(&n);
        }
        false
    }
}

/// Geometry of the host's nodes.
pub trait NodeBounds<K> {
    /// The node's border box in the shared coordinate space, if it has one.
    fn bounds(&self, node: &K) -> Option<Rect>;
}

#[derive(Clone, Debug)]
struct Entry<K> {
    node: K,
    parent: Option<K>,
    bounds: Rect,
    connected: bool,
}

/// A small in-memory node tree.
///
/// Lookups are linear; this is meant for tests, demos and hosts with a few
/// dozen interactive nodes, not for a full scene graph.
#[derive(Clone, Debug)]
pub struct SimpleTree<K> {
    entries: Vec<Entry<K>>,
}

impl<K> Default for SimpleTree<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Copy + Eq> SimpleTree<K> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `node` with the given parent and bounds. The node is
    /// connected afterwards.
    pub fn insert(&mut self, node: K, parent: Option<K>, bounds: Rect) {
        if let Some(e) = self.entry_mut(&node) {
            e.parent = parent;
            e.bounds = bounds;
            e.connected = true;
        } else {
            self.entries.push(Entry {
                node,
                parent,
                bounds,
                connected: true,
            });
        }
    }

    /// Move `node` to new bounds. Returns `false` for unknown nodes.
    pub fn set_bounds(&mut self, node: &K, bounds: Rect) -> bool {
        match self.entry_mut(node) {
            Some(e) => {
                e.bounds = bounds;
                true
            }
            None => false,
        }
    }

    /// Mark `node` as detached from the document while keeping its record.
    pub fn detach(&mut self, node: &K) {
        if let Some(e) = self.entry_mut(node) {
            e.connected = false;
        }
    }

    /// Forget `node` entirely.
    pub fn remove(&mut self, node: &K) {
        self.entries.retain(|e| e.node != *node);
    }

    fn entry(&self, node: &K) -> Option<&Entry<K>> {
        self.entries.iter().find(|e| e.node == *node)
    }

    fn entry_mut(&mut self, node: &K) -> Option<&mut Entry<K>> {
        self.entries.iter_mut().find(|e| e.node == *node)
    }
}

impl<K: Copy + Eq> NodeTree<K> for SimpleTree<K> {
    fn parent_of(&self, node: &K) -> Option<K> {
        self.entry(node).and_then(|e| e.parent)
    }

    fn is_connected(&self, node: &K) -> bool {
        self.entry(node).is_some_and(|e| e.connected)
    }
}

impl<K: Copy + Eq> NodeBounds<K> for SimpleTree<K> {
    fn bounds(&self, node: &K) -> Option<Rect> {
        self.entry(node).filter(|e| e.connected).map(|e| e.bounds)
    }
}
