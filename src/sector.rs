//! Sector trees: the hierarchical spatial index of a model.
//!
//! A model's spatial index arrives as a flat table of sector descriptors
//! (id, parent id, bounding box); [`Sector::from_descriptors`] assembles the
//! owned tree. Framing code only needs the minimal [`SpatialNode`] view of
//! it — bounds plus children — so consumers with their own tree
//! representation can implement that trait instead of converting.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::bounds::Aabb;
use crate::error::VantageError;

/// Minimal read-only view of a node in a bounding-volume hierarchy.
pub trait SpatialNode {
    /// Bounding box of this node, in model space.
    fn bounds(&self) -> Aabb;

    /// Child nodes. Empty for leaves.
    fn children(&self) -> impl Iterator<Item = &Self>;
}

/// Visit every node of the tree exactly once, depth-first.
///
/// Iterative traversal over an explicit stack; sibling order follows the
/// order `children()` yields (later siblings are visited first, which is
/// irrelevant to order-insensitive accumulation). The tree is never mutated.
pub fn visit_depth_first<N: SpatialNode>(root: &N, mut visit: impl FnMut(&N)) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        visit(node);
        stack.extend(node.children());
    }
}

/// Flat sector metadata as delivered by a model's spatial-index manifest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorDescriptor {
    /// Sector id, unique within one model.
    pub id: u64,
    /// Parent sector id; `None` marks the root.
    pub parent_id: Option<u64>,
    /// Sector bounding box in model space.
    pub bounds: Aabb,
}

/// Owned node of a sector tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    /// Sector id, unique within one model.
    pub id: u64,
    /// Depth below the root (root is 0).
    pub depth: u32,
    /// Sector bounding box in model space.
    pub bounds: Aabb,
    /// Child sectors.
    pub children: Vec<Sector>,
}

impl SpatialNode for Sector {
    fn bounds(&self) -> Aabb {
        self.bounds
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter()
    }
}

impl Sector {
    /// Build a sector tree from a flat descriptor table.
    ///
    /// Exactly one descriptor must have `parent_id == None` (the root), ids
    /// must be unique, and every parent reference must resolve to a
    /// descriptor in the table. Descriptors that exist but are not reachable
    /// from the root (orphaned subtrees, parent cycles) are rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`VantageError`] describing the first structural defect
    /// found in the table.
    pub fn from_descriptors(
        descriptors: &[SectorDescriptor],
    ) -> Result<Self, VantageError> {
        let mut by_id: FxHashMap<u64, &SectorDescriptor> =
            FxHashMap::default();
        for descriptor in descriptors {
            if by_id.insert(descriptor.id, descriptor).is_some() {
                return Err(VantageError::DuplicateSector(descriptor.id));
            }
        }

        let mut root_id = None;
        let mut children_of: FxHashMap<u64, Vec<u64>> = FxHashMap::default();
        for descriptor in descriptors {
            match descriptor.parent_id {
                None => match root_id {
                    None => root_id = Some(descriptor.id),
                    Some(first) => {
                        return Err(VantageError::MultipleRoots {
                            first,
                            second: descriptor.id,
                        })
                    }
                },
                Some(parent) => {
                    if !by_id.contains_key(&parent) {
                        return Err(VantageError::UnknownParent {
                            sector: descriptor.id,
                            parent,
                        });
                    }
                    children_of.entry(parent).or_default().push(descriptor.id);
                }
            }
        }
        let root_id = root_id.ok_or(VantageError::MissingRoot)?;

        let mut built = 0usize;
        let root =
            build_subtree(root_id, 0, &by_id, &mut children_of, &mut built);
        if built != descriptors.len() {
            return Err(VantageError::UnreachableSectors(
                descriptors.len() - built,
            ));
        }

        let mut max_depth = 0;
        visit_depth_first(&root, |sector| max_depth = max_depth.max(sector.depth));
        log::debug!("built sector tree: {built} sectors, max depth {max_depth}");

        Ok(root)
    }
}

fn build_subtree(
    id: u64,
    depth: u32,
    by_id: &FxHashMap<u64, &SectorDescriptor>,
    children_of: &mut FxHashMap<u64, Vec<u64>>,
    built: &mut usize,
) -> Sector {
    *built += 1;
    let child_ids = children_of.remove(&id).unwrap_or_default();
    let children = child_ids
        .into_iter()
        .map(|child| build_subtree(child, depth + 1, by_id, children_of, built))
        .collect();
    Sector {
        id,
        depth,
        bounds: by_id[&id].bounds,
        children,
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn descriptor(id: u64, parent_id: Option<u64>) -> SectorDescriptor {
        let base = id as f32;
        SectorDescriptor {
            id,
            parent_id,
            bounds: Aabb::new(Vec3::splat(base), Vec3::splat(base + 1.0)),
        }
    }

    #[test]
    fn builds_two_level_tree() {
        let table = [
            descriptor(0, None),
            descriptor(1, Some(0)),
            descriptor(2, Some(0)),
            descriptor(3, Some(1)),
        ];
        let root = Sector::from_descriptors(&table).unwrap();

        assert_eq!(root.id, 0);
        assert_eq!(root.depth, 0);
        assert_eq!(root.children.len(), 2);
        let child1 = root.children.iter().find(|s| s.id == 1).unwrap();
        assert_eq!(child1.depth, 1);
        assert_eq!(child1.children.len(), 1);
        assert_eq!(child1.children[0].id, 3);
        assert_eq!(child1.children[0].depth, 2);
    }

    #[test]
    fn depth_first_visits_each_node_once() {
        let table = [
            descriptor(0, None),
            descriptor(1, Some(0)),
            descriptor(2, Some(0)),
            descriptor(3, Some(2)),
            descriptor(4, Some(2)),
        ];
        let root = Sector::from_descriptors(&table).unwrap();

        let mut visited = Vec::new();
        visit_depth_first(&root, |sector| visited.push(sector.id));
        visited.sort_unstable();
        assert_eq!(visited, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let table = [descriptor(0, None), descriptor(1, Some(0)), descriptor(1, Some(0))];
        assert!(matches!(
            Sector::from_descriptors(&table),
            Err(VantageError::DuplicateSector(1))
        ));
    }

    #[test]
    fn rejects_missing_root() {
        let table = [descriptor(1, Some(2)), descriptor(2, Some(1))];
        assert!(matches!(
            Sector::from_descriptors(&table),
            Err(VantageError::MissingRoot)
        ));
    }

    #[test]
    fn rejects_multiple_roots() {
        let table = [descriptor(0, None), descriptor(1, None)];
        assert!(matches!(
            Sector::from_descriptors(&table),
            Err(VantageError::MultipleRoots { first: 0, second: 1 })
        ));
    }

    #[test]
    fn rejects_unknown_parent() {
        let table = [descriptor(0, None), descriptor(1, Some(7))];
        assert!(matches!(
            Sector::from_descriptors(&table),
            Err(VantageError::UnknownParent { sector: 1, parent: 7 })
        ));
    }

    #[test]
    fn rejects_cycle_detached_from_root() {
        // 2 and 3 reference each other; both exist in the table, so parent
        // lookup succeeds, but neither is reachable from the root.
        let table = [
            descriptor(0, None),
            descriptor(1, Some(0)),
            descriptor(2, Some(3)),
            descriptor(3, Some(2)),
        ];
        assert!(matches!(
            Sector::from_descriptors(&table),
            Err(VantageError::UnreachableSectors(2))
        ));
    }
}
