//! Prepend-only, owned list of meshes.

use std::collections::VecDeque;
use std::fmt;

/// Identity of a mesh inside a [`MeshList`]. Stable for the life of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(u32);

impl fmt::Display for MeshId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mesh#{}", self.0)
    }
}

/// Ordered container that only grows at the front.
///
/// Traversal starts at the most recently inserted element, so inserting
/// `a, b, c` visits `c, b, a`. There is no removal.
#[derive(Debug)]
pub struct MeshList<T> {
    nodes: VecDeque<(MeshId, T)>,
    next_id: u32,
}

impl<T> MeshList<T> {
    pub fn new() -> Self {
        Self {
            nodes: VecDeque::new(),
            next_id: 0,
        }
    }

    /// Insert at the front and return the new element's identity.
    pub fn prepend(&mut self, item: T) -> MeshId {
        let id = MeshId(self.next_id);
        self.next_id += 1;
        self.nodes.push_front((id, item));
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: MeshId) -> Option<&T> {
        self.nodes
            .iter()
            .find(|(node_id, _)| *node_id == id)
            .map(|(_, item)| item)
    }

    pub fn get_mut(&mut self, id: MeshId) -> Option<&mut T> {
        self.nodes
            .iter_mut()
            .find(|(node_id, _)| *node_id == id)
            .map(|(_, item)| item)
    }

    /// Front-to-back traversal, newest first.
    pub fn iter(&self) -> impl Iterator<Item = (MeshId, &T)> {
        self.nodes.iter().map(|(id, item)| (*id, item))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (MeshId, &mut T)> {
        self.nodes.iter_mut().map(|(id, item)| (*id, item))
    }
}

impl<T> Default for MeshList<T> {
    fn default() -> Self {
        Self::new()
    }
}
