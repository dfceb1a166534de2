//! Backward induction over a built game tree
//!
//! Outcomes flow from the leaves to the root. At each choice point the player
//! to move takes the child with the best verdict for them. Among equally good
//! children, a winner takes the line with the fewest plies left and anyone
//! else takes the line with the most. Path length is counted as plies
//! remaining to the terminal position, so sibling comparisons do not depend on
//! how deep the subtree sits in a larger tree.

use std::cmp::Ordering;

use tracing::{debug, instrument, trace};

use super::{
    Board, Player,
    game_tree::{TreeNode, build_tree},
    outcome::Verdict,
};

/// Annotate `node` and every descendant with its optimal outcome and
/// continuation.
///
/// Running it again on the same tree recomputes identical annotations.
#[instrument(level = "debug", skip_all, fields(board = %node.board().encode()))]
pub fn resolve(node: &mut TreeNode) {
    resolve_node(node);
    debug!(
        outcome = %node.outcome(),
        line = ?node.best_continuation(),
        "position resolved"
    );
}

/// Build the full tree below `board` and resolve it
pub fn solve(board: Board, to_move: Player) -> TreeNode {
    let mut tree = build_tree(board, to_move);
    resolve(&mut tree);
    tree
}

fn resolve_node(node: &mut TreeNode) {
    if node.is_terminal() {
        debug_assert!(
            node.outcome().is_decided(),
            "leaf {} has no outcome",
            node.board().encode()
        );
        node.best_continuation.clear();
        return;
    }

    for child in node.children_mut() {
        resolve_node(child);
    }

    let mover = node.player_to_move();
    let mut best: Option<&TreeNode> = None;
    for candidate in node.children() {
        best = match best {
            Some(current) if !improves_on(candidate, current, mover) => Some(current),
            _ => Some(candidate),
        };
    }

    // Non-terminal nodes always have at least one child.
    let Some(best) = best else {
        return;
    };
    let outcome = best.outcome();
    let mut line = Vec::with_capacity(best.plies_remaining() + 1);
    line.extend(best.produced_by());
    line.extend_from_slice(best.best_continuation());

    trace!(
        board = %node.board().encode(),
        %outcome,
        plies = line.len(),
        "selected continuation"
    );
    node.outcome = outcome;
    node.best_continuation = line;
}

/// Whether `mover` should switch from `current` to `candidate`
fn improves_on(candidate: &TreeNode, current: &TreeNode, mover: Player) -> bool {
    let candidate_verdict = candidate.outcome().verdict_for(mover);
    let current_verdict = current.outcome().verdict_for(mover);

    match candidate_verdict.cmp(&current_verdict) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal if candidate_verdict == Some(Verdict::Winning) => {
            candidate.plies_remaining() < current.plies_remaining()
        }
        Ordering::Equal => candidate.plies_remaining() > current.plies_remaining(),
    }
}
