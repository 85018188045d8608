//! Printable token values with punctuation merged into content tokens

use super::mask::TokenMask;
use super::tree::SentenceTree;
use std::ops::Range;

/// Token strings and the positions that still hold content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstituted {
    pub values: Vec<String>,
    pub valid: TokenMask,
}

/// Merge every attachable token into a neighbouring content token
///
/// Each maximal run of attachable tokens sits between at most two content
/// tokens and is split once: a prefix joins the content token on the left,
/// the rest joins the one on the right. A token prefers the side of its head.
/// When preferences cross (`A ( , B` with `(` leaning right and `,` leaning
/// left) the split that honours the most preferences wins, ties going to the
/// leftmost split. Runs at a sentence edge join their only neighbour.
///
/// A content token's value is the verbatim document slice from its leftmost
/// absorbed offset to its rightmost one, so source spacing is preserved and
/// no attachable text is lost or repeated.
pub fn reconstitute(document: &str, tree: &SentenceTree) -> Reconstituted {
    let len = tree.len();
    let mut spans: Vec<(usize, usize)> = tree.tokens().iter().map(|t| (t.start, t.end)).collect();

    let mut i = 0;
    while i < len {
        if !tree.is_attachable(i) {
            i += 1;
            continue;
        }

        let run_start = i;
        while i < len && tree.is_attachable(i) {
            i += 1;
        }
        let run = run_start..i;

        // The run is maximal, so its neighbours are content tokens
        let left = run.start.checked_sub(1);
        let right = (run.end < len).then_some(run.end);

        let split = match (left, right) {
            (Some(_), Some(_)) => best_split(tree, run.clone()),
            (Some(_), None) => run.end,
            (None, _) => run.start,
        };

        if let Some(l) = left.filter(|_| split > run.start) {
            spans[l].1 = tree.token(split - 1).end;
        }
        if let Some(r) = right.filter(|_| split < run.end) {
            spans[r].0 = tree.token(split).start;
        }
    }

    let values = (0..len)
        .map(|i| {
            if tree.is_attachable(i) {
                String::new()
            } else {
                let (start, end) = spans[i];
                document[start..end].to_string()
            }
        })
        .collect();

    let valid = TokenMask::from_bools((0..len).map(|i| !tree.is_attachable(i)).collect());

    Reconstituted { values, valid }
}

/// First split point of `run` with the fewest tokens placed against their
/// head's side; tokens before the split go left
fn best_split(tree: &SentenceTree, run: Range<usize>) -> usize {
    let leans_left = |t: usize| tree.parent(t).is_some_and(|p| p < t);

    // Split at run.start: everything goes right
    let mut cost = run.clone().filter(|&t| leans_left(t)).count();
    let mut best = (cost, run.start);

    for t in run.clone() {
        // Moving the split past `t` sends it left
        if leans_left(t) {
            cost -= 1;
        } else {
            cost += 1;
        }
        if cost < best.0 {
            best = (cost, t + 1);
        }
    }

    best.1
}
