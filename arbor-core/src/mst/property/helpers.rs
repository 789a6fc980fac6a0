//! Union-find helpers shared by the oracle and the structural checks.

/// Path-halving find.
pub(super) fn find_root(parent: &mut [usize], mut vertex: usize) -> usize {
    while parent[vertex] != vertex {
        parent[vertex] = parent[parent[vertex]];
        vertex = parent[vertex];
    }
    vertex
}

/// Joins the sets containing `left` and `right`, returning `false` when
/// they were already joined.
pub(super) fn union(parent: &mut [usize], left: usize, right: usize) -> bool {
    let left_root = find_root(parent, left);
    let right_root = find_root(parent, right);
    if left_root == right_root {
        return false;
    }
    let (root, child) = if left_root <= right_root {
        (left_root, right_root)
    } else {
        (right_root, left_root)
    };
    parent[child] = root;
    true
}
