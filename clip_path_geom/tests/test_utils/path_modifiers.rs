use clip_path_geom::path::{Path, PathNode};

/// Cycles all the node index positions forward by `n`. E.g. index 0 becomes 1, last index becomes
/// 0, etc. (only applicable to closed paths)
pub fn cycle_start_index_forward(input: &Path, n: usize) -> Path {
    assert!(n > 0, "cycling forward by 0 just returns the same path");
    assert!(
        n < input.len(),
        "cycling forward by more than the path length is unnecessary"
    );
    assert!(
        input.is_closed(),
        "cycling node index positions not possible with open path"
    );
    let nodes = input
        .nodes()
        .iter()
        .cycle()
        .skip(n)
        .take(input.len())
        .copied()
        .collect();
    Path::with_id(input.id(), nodes, true)
}

/// Same path traversed in the opposite direction (node order reversed and handles swapped).
pub fn invert_direction(input: &Path) -> Path {
    let nodes = input
        .nodes()
        .iter()
        .rev()
        .map(|n| {
            PathNode::with_id(
                n.id(),
                n.position(),
                n.handle_out(),
                n.handle_in(),
                n.node_type(),
            )
        })
        .collect();
    Path::with_id(input.id(), nodes, input.is_closed())
}

#[derive(Debug, Clone, Copy)]
pub struct ModifiedPathState {
    pub inverted_direction: bool,
    pub cycle_position: usize,
}

impl ModifiedPathState {
    pub fn new(inverted_direction: bool, cycle_position: usize) -> Self {
        Self {
            inverted_direction,
            cycle_position,
        }
    }
}

/// Set of geometrically equivalent variations of a path (direction inverted and/or start index
/// cycled).
#[derive(Debug, Clone)]
pub struct ModifiedPathSet<'a> {
    pub input: &'a Path,
    pub invert_direction: bool,
    pub cycle_index_positions: bool,
}

impl<'a> ModifiedPathSet<'a> {
    pub fn new(input: &'a Path, invert_direction: bool, cycle_index_positions: bool) -> Self {
        Self {
            input,
            invert_direction,
            cycle_index_positions,
        }
    }

    pub fn accept_closure<F>(&self, visitor: &mut F)
    where
        F: FnMut(Path, ModifiedPathState),
    {
        visitor(self.input.clone(), ModifiedPathState::new(false, 0));
        let inverted = invert_direction(self.input);
        if self.invert_direction {
            visitor(inverted.clone(), ModifiedPathState::new(true, 0));
        }

        if self.cycle_index_positions && self.input.is_closed() {
            for i in 1..self.input.len() {
                visitor(
                    cycle_start_index_forward(self.input, i),
                    ModifiedPathState::new(false, i),
                );
            }

            if self.invert_direction {
                for i in 1..self.input.len() {
                    visitor(
                        cycle_start_index_forward(&inverted, i),
                        ModifiedPathState::new(true, i),
                    );
                }
            }
        }
    }
}
