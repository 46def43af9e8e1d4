use {
    num::Zero,
    std::{
        cmp::Ordering,
        collections::{BinaryHeap, HashMap},
        hash::Hash,
        ops::Add,
    },
};

/// A frontier element ordered by cost alone, reversed so that `BinaryHeap` pops the cheapest
/// entry first.
pub struct FrontierEntry<V, C>(pub V, pub C);

impl<V, C: Ord> PartialEq for FrontierEntry<V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.1 == other.1
    }
}

impl<V, C: Ord> Eq for FrontierEntry<V, C> {}

impl<V, C: Ord> PartialOrd for FrontierEntry<V, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, C: Ord> Ord for FrontierEntry<V, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.1.cmp(&self.1)
    }
}

/// Single-source shortest paths by cost relaxation over a lazily expanded graph.
///
/// Implementors describe the start vertex and the out-edges of any vertex; `best_costs` runs the
/// search to exhaustion and returns the converged cost table. Vertices are re-pushed on every
/// improvement instead of being re-prioritized in place, so stale frontier entries are skipped
/// when popped.
pub trait CostRelaxation {
    type Vertex: Copy + Eq + Hash;
    type Cost: Add<Output = Self::Cost> + Copy + Ord + Zero;

    fn start(&self) -> Self::Vertex;

    /// Writes the `(vertex, edge cost)` out-edges of `vertex` into `neighbors`, which is cleared
    /// beforehand.
    fn neighbors(&self, vertex: Self::Vertex, neighbors: &mut Vec<(Self::Vertex, Self::Cost)>);

    fn best_costs(&self) -> HashMap<Self::Vertex, Self::Cost> {
        let mut best_costs: HashMap<Self::Vertex, Self::Cost> = HashMap::new();
        let mut frontier: BinaryHeap<FrontierEntry<Self::Vertex, Self::Cost>> = BinaryHeap::new();
        let mut neighbors: Vec<(Self::Vertex, Self::Cost)> = Vec::new();

        best_costs.insert(self.start(), Self::Cost::zero());
        frontier.push(FrontierEntry(self.start(), Self::Cost::zero()));

        while let Some(FrontierEntry(vertex, cost)) = frontier.pop() {
            if best_costs
                .get(&vertex)
                .map_or(false, |best_cost: &Self::Cost| cost > *best_cost)
            {
                continue;
            }

            neighbors.clear();
            self.neighbors(vertex, &mut neighbors);

            for &(neighbor, edge_cost) in &neighbors {
                let neighbor_cost: Self::Cost = cost + edge_cost;

                if best_costs
                    .get(&neighbor)
                    .map_or(true, |best_cost: &Self::Cost| neighbor_cost < *best_cost)
                {
                    best_costs.insert(neighbor, neighbor_cost);
                    frontier.push(FrontierEntry(neighbor, neighbor_cost));
                }
            }
        }

        best_costs
    }
}
