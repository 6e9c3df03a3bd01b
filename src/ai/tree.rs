//! Breadth-first decision tree stored in a bump arena

use crate::core::{apply_move, legal_moves, GameState, Move, Side};
use crate::heuristics::Heuristic;

use bumpalo::{collections::Vec, Bump};
use std::ops::Range;
use std::vec::Vec as StdVec;

/// One position in the tree
#[derive(Debug, Clone)]
pub struct Node {
    /// Move that led here, `None` at the root
    pub mv: Option<Move>,
    pub state: GameState,
    pub depth: u32,
    /// Indices of the children in the arena
    pub children: Range<usize>,
    /// Backed-up minimax score
    pub score: i32,
}

impl Node {
    fn new(mv: Option<Move>, state: GameState, depth: u32) -> Self {
        Self {
            mv,
            state,
            depth,
            children: 0..0,
            score: 0,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Every position reachable from the root within a fixed number of plies.
/// Children of a node are contiguous, and always stored after their parent.
pub struct DecisionTree<'a> {
    nodes: Vec<'a, Node>,
}

impl<'a> DecisionTree<'a> {
    pub fn build(root: &GameState, max_depth: u32, arena: &'a Bump) -> Self {
        let mut nodes = Vec::new_in(arena);
        nodes.push(Node::new(None, root.clone(), 0));

        let mut next = 0;
        while next < nodes.len() {
            let node = &nodes[next];
            let depth = node.depth;

            let children: StdVec<Node> = match node.state.side_to_move() {
                Some(side) if depth < max_depth && !node.state.is_game_over() => {
                    legal_moves(&node.state, side)
                        .into_iter()
                        .filter_map(|mv| {
                            apply_move(&node.state, mv.from, mv.to)
                                .into_state()
                                .map(|state| Node::new(Some(mv), state, depth + 1))
                        })
                        .collect()
                }
                _ => StdVec::new(),
            };

            let start = nodes.len();
            nodes.extend(children);
            nodes[next].children = start..nodes.len();

            next += 1;
        }

        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn children(&self, node: &Node) -> &[Node] {
        &self.nodes[node.children.clone()]
    }

    /// Back up scores from the leaves. Leaves are scored for `side`; even
    /// depths maximize and odd depths minimize.
    pub fn minimax<H: Heuristic + ?Sized>(&mut self, heuristic: &H, side: Side) -> i32 {
        for i in (0..self.nodes.len()).rev() {
            let node = &self.nodes[i];
            let scores = self.nodes[node.children.clone()].iter().map(|child| child.score);

            let backed_up = if node.depth % 2 == 0 {
                scores.max()
            } else {
                scores.min()
            };

            let score = backed_up.unwrap_or_else(|| heuristic.evaluate(&node.state, side));
            self.nodes[i].score = score;
        }

        self.root().score
    }
}
