//! Locating ERROR and MISSING nodes in a tree-sitter tree.
//!
//! Both searches run on a `TreeCursor` rather than recursing.

use tree_sitter::{Node, TreeCursor};

/// Position (0-based row, column) of the first ERROR or MISSING node in
/// document order, or `None` for a clean tree.
pub fn first_error(root: Node) -> Option<(usize, usize)> {
    if !root.has_error() {
        return None;
    }
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            let pos = node.start_position();
            return Some((pos.row, pos.column));
        }
        // Only subtrees that contain an error are entered.
        if !(node.has_error() && cursor.goto_first_child()) && !advance(&mut cursor) {
            return None;
        }
    }
}

/// Count ERROR and MISSING nodes in a tree.
pub fn count_errors(root: Node) -> u32 {
    if !root.has_error() {
        return 0;
    }
    let mut count = 0;
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            count += 1;
        }
        if !(node.has_error() && cursor.goto_first_child()) && !advance(&mut cursor) {
            return count;
        }
    }
}

/// Move to the next node after the current subtree; false once the walk
/// is back at its starting node.
fn advance(cursor: &mut TreeCursor) -> bool {
    loop {
        if cursor.goto_next_sibling() {
            return true;
        }
        if !cursor.goto_parent() {
            return false;
        }
    }
}
