//! Shared helpers for the integration tests.

#![allow(dead_code)]

use tictree::{Board, Player, TreeNode};

pub fn board(s: &str) -> Board {
    Board::from_string(s).expect("test board should parse")
}

/// Replay a move sequence from `start`, alternating from `first`
pub fn replay(start: Board, first: Player, moves: &[usize]) -> Board {
    let mut current = start;
    let mut player = first;
    for &pos in moves {
        current = current
            .with_move(pos, player)
            .expect("replayed move should be legal");
        player = player.opponent();
    }
    current
}

/// Every node paired with the moves that lead to it from the root
pub fn nodes_with_paths(root: &TreeNode) -> Vec<(&TreeNode, Vec<usize>)> {
    let mut out = Vec::new();
    let mut stack = vec![(root, Vec::new())];
    while let Some((node, path)) = stack.pop() {
        for child in node.children() {
            let mut next = path.clone();
            next.extend(child.produced_by());
            stack.push((child, next));
        }
        out.push((node, path));
    }
    out
}
