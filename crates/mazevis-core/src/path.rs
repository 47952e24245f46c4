use crate::error::CorruptPathError;
use crate::grid::Coord;
use crate::traversal::{NodeId, SearchTree};

/// Walk parent links from `node` back to the root and return the path in
/// start→goal order.
///
/// `None` (goal not reached) yields an empty path. A corrupt tree also yields
/// an empty path, never a partial one; the corruption is logged.
pub fn reconstruct_path(tree: &SearchTree, node: Option<NodeId>, start: Coord) -> Vec<Coord> {
    let Some(node) = node else {
        return Vec::new();
    };
    match try_reconstruct_path(tree, node, start) {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!(error = %e, "discarding corrupt path");
            Vec::new()
        }
    }
}

/// Like [`reconstruct_path`] but reports why a tree does not lead back to
/// `start`.
pub fn try_reconstruct_path(
    tree: &SearchTree,
    node: NodeId,
    start: Coord,
) -> Result<Vec<Coord>, CorruptPathError> {
    let mut path = Vec::new();
    let mut current = Some(node);
    let mut child = node;

    while let Some(id) = current {
        let Some(n) = tree.get(id) else {
            return Err(CorruptPathError::DanglingParent {
                child,
                parent: id,
            });
        };
        if path.len() >= tree.len() {
            return Err(CorruptPathError::Cycle { nodes: tree.len() });
        }
        path.push(n.coord);
        child = id;
        current = n.parent;
    }

    path.reverse();
    match path.first() {
        Some(&first) if first == start => Ok(path),
        Some(&first) => Err(CorruptPathError::WrongRoot {
            expected: start,
            found: first,
        }),
        // `node` resolved, so the walk pushed at least one coordinate.
        None => Ok(path),
    }
}

/// Whether every consecutive pair of `path` is one unit move apart.
pub fn is_contiguous(path: &[Coord]) -> bool {
    path.windows(2).all(|w| w[0].is_adjacent(w[1]))
}
