//! Exhaustive game tree construction
//!
//! Every reachable continuation of a position is expanded down to a won or
//! full board. No pruning, memoization or symmetry reduction is applied, so
//! the tree from the empty board holds 549,946 nodes and 255,168 leaves.

use serde::Serialize;
use tracing::{debug, instrument, trace};

use super::{
    Board, Player,
    outcome::{Outcome, Verdict, evaluate},
};

/// One reachable position in the game tree.
///
/// Built top-down by [`build_tree`]; afterwards only
/// [`resolve`](super::resolve::resolve) writes to it, and only the outcome
/// and best continuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    board: Board,
    player_to_move: Player,
    children: Vec<TreeNode>,
    pub(crate) outcome: Outcome,
    depth: usize,
    produced_by: Option<usize>,
    pub(crate) best_continuation: Vec<usize>,
}

impl TreeNode {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    /// One child per empty cell, ordered by the move that produced it
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [TreeNode] {
        &mut self.children
    }

    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }

    /// Absolute outcome. Leaves carry their evaluated outcome from
    /// construction; internal nodes stay `InProgress` until resolved.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The outcome from the point of view of the player to move here
    pub fn verdict(&self) -> Option<Verdict> {
        self.outcome.verdict_for(self.player_to_move)
    }

    /// Distance from the root of the tree this node belongs to.
    ///
    /// Only reported in logs and stats; the resolver ranks lines by
    /// [`TreeNode::plies_remaining`].
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The cell played by the parent to reach this node; `None` at the root
    pub fn produced_by(&self) -> Option<usize> {
        self.produced_by
    }

    /// Optimal moves from this position onward. Empty before resolution and
    /// at leaves.
    pub fn best_continuation(&self) -> &[usize] {
        &self.best_continuation
    }

    /// Number of plies from here to the end of the resolved line
    pub fn plies_remaining(&self) -> usize {
        self.best_continuation.len()
    }

    /// The move that produced this node followed by its best continuation
    pub fn principal_line(&self) -> Vec<usize> {
        self.produced_by
            .into_iter()
            .chain(self.best_continuation.iter().copied())
            .collect()
    }

    /// Child reached by playing `pos`, if that move was legal here
    pub fn child(&self, pos: usize) -> Option<&TreeNode> {
        self.children
            .iter()
            .find(|child| child.produced_by == Some(pos))
    }

    /// Depth-first, pre-order walk over this node and every descendant
    pub fn iter(&self) -> impl Iterator<Item = &TreeNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Walk the tree once and count what it contains
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        for node in self.iter() {
            stats.nodes += 1;
            stats.max_depth = stats.max_depth.max(node.depth);
            if !node.is_terminal() {
                continue;
            }
            stats.leaves += 1;
            match node.outcome {
                Outcome::Win(Player::X) => stats.x_wins += 1,
                Outcome::Win(Player::O) => stats.o_wins += 1,
                Outcome::Draw => stats.draws += 1,
                Outcome::InProgress => {}
            }
        }
        stats
    }
}

/// Size and leaf outcome counts of a built tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub nodes: usize,
    pub leaves: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub max_depth: usize,
}

/// Build the complete tree below `board` with `player_to_move` acting first.
#[instrument(level = "debug", skip(board), fields(board = %board.encode()))]
pub fn build_tree(board: Board, player_to_move: Player) -> TreeNode {
    let root = expand(board, player_to_move, 0, None);
    debug!(
        children = root.children.len(),
        terminal = root.is_terminal(),
        "game tree built"
    );
    root
}

/// Build the complete tree from the empty board
pub fn build_tree_from_empty(player_to_move: Player) -> TreeNode {
    build_tree(Board::new(), player_to_move)
}

fn expand(board: Board, player: Player, depth: usize, produced_by: Option<usize>) -> TreeNode {
    let outcome = evaluate(&board);
    let mut node = TreeNode {
        board,
        player_to_move: player,
        children: Vec::new(),
        outcome,
        depth,
        produced_by,
        best_continuation: Vec::new(),
    };

    let moves = board.empty_positions();
    if outcome.is_decided() || moves.is_empty() {
        trace!(board = %board.encode(), depth, %outcome, "terminal position");
        return node;
    }

    trace!(board = %board.encode(), depth, moves = moves.len(), "expanding position");
    node.children = moves
        .into_iter()
        .map(|pos| match board.with_move(pos, player) {
            Ok(next) => expand(next, player.opponent(), depth + 1, Some(pos)),
            Err(err) => unreachable!("empty cell {pos} rejected a move: {err}"),
        })
        .collect();
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_board_has_no_children() {
        let board = Board::from_string("XXXOO....").unwrap();
        let tree = build_tree(board, Player::O);

        assert!(tree.is_terminal());
        assert_eq!(tree.outcome(), Outcome::Win(Player::X));
        assert_eq!(tree.verdict(), Some(Verdict::Losing));
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.produced_by(), None);
    }

    #[test]
    fn children_follow_empty_cells_in_order() {
        let board = Board::from_string("X...O...X").unwrap();
        let tree = build_tree(board, Player::O);

        let moves: Vec<_> = tree.children().iter().filter_map(|c| c.produced_by()).collect();
        assert_eq!(moves, board.empty_positions());
        for child in tree.children() {
            assert_eq!(child.depth(), 1);
            assert_eq!(child.player_to_move(), Player::X);
            let pos = child.produced_by().unwrap();
            assert_eq!(child.board().get(pos), Player::O.to_cell());
        }
    }

    #[test]
    fn every_internal_node_has_a_child_per_empty_cell() {
        let tree = build_tree(Board::from_string("X...O....").unwrap(), Player::X);

        for node in tree.iter().filter(|node| !node.is_terminal()) {
            assert_eq!(node.children().len(), node.board().empty_positions().len());
        }
    }

    #[test]
    fn internal_nodes_start_unresolved() {
        let tree = build_tree(Board::from_string("XOXXOOOX.").unwrap(), Player::X);

        assert_eq!(tree.outcome(), Outcome::InProgress);
        assert!(tree.best_continuation().is_empty());
        assert_eq!(tree.children().len(), 1);
        assert_eq!(tree.children()[0].outcome(), Outcome::Draw);
    }

    #[test]
    fn stats_count_a_small_tree() {
        let tree = build_tree(Board::from_string("X...OO..X").unwrap(), Player::X);
        let stats = tree.stats();

        assert_eq!(stats.nodes, 174);
        assert_eq!(stats.leaves, 86);
        assert_eq!(stats.x_wins, 34);
        assert_eq!(stats.o_wins, 40);
        assert_eq!(stats.draws, 12);
        assert_eq!(stats.max_depth, 5);
    }

    #[test]
    fn iter_visits_root_first() {
        let tree = build_tree(Board::from_string("XOXXOOO..").unwrap(), Player::X);
        let boards: Vec<_> = tree.iter().map(|n| n.board().encode()).collect();

        assert_eq!(boards[0], "XOXXOOO..");
        assert_eq!(boards.len(), tree.stats().nodes);
    }
}
