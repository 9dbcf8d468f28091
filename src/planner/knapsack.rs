//! Bounded knapsack solver
//!
//! Each item may be taken up to `quantity` times. The bounded problem is
//! reduced to 0/1 knapsack by expanding every item into as many copies as
//! could ever fit, then solved with the usual (item, capacity) table.
//!
//! Ties are broken towards exclusion: an item only enters the solution when
//! it strictly improves the value. Combined with the fixed expansion order
//! this makes the selection fully deterministic.

/// Anything the solver can pick
pub trait KnapsackItem {
    /// Capacity consumed by one copy (at least 1)
    fn weight(&self) -> u32;

    /// Value gained by one copy
    fn value(&self) -> f64;

    /// Maximum number of copies
    fn quantity(&self) -> u32;
}

/// Expand bounded items into 0/1 copies, in input order
fn expand<T: KnapsackItem>(items: &[T], capacity: u32) -> Vec<&T> {
    let mut expanded = Vec::new();
    for item in items {
        let copies = match capacity.checked_div(item.weight()) {
            Some(fit) => fit.min(item.quantity()),
            None => item.quantity(),
        };
        for _ in 0..copies {
            expanded.push(item);
        }
    }
    expanded
}

/// Select the value-maximizing multiset of items within `capacity`
///
/// Returns one reference per selected copy, in expansion order, so an item
/// picked twice appears twice.
pub fn solve<T: KnapsackItem>(items: &[T], capacity: u32) -> Vec<&T> {
    let expanded = expand(items, capacity);
    let cap = capacity as usize;
    if expanded.is_empty() || cap == 0 {
        return Vec::new();
    }

    let width = cap + 1;
    // best[i * width + w]: best value using the first i copies within w
    let mut best = vec![0.0_f64; (expanded.len() + 1) * width];
    // taken[(i - 1) * width + w]: copy i - 1 is included at state (i, w)
    let mut taken = vec![false; expanded.len() * width];

    for (i, item) in expanded.iter().enumerate() {
        let weight = item.weight() as usize;
        let (prev, rest) = best.split_at_mut((i + 1) * width);
        let prev = &prev[i * width..];
        let row = &mut rest[..width];

        for w in 0..width {
            let without = prev[w];
            row[w] = without;
            if weight <= w {
                let with = item.value() + prev[w - weight];
                if with > without {
                    row[w] = with;
                    taken[i * width + w] = true;
                }
            }
        }
    }

    let mut selected = Vec::new();
    let mut w = cap;
    for i in (0..expanded.len()).rev() {
        if taken[i * width + w] {
            selected.push(expanded[i]);
            w -= expanded[i].weight() as usize;
        }
    }
    selected.reverse();

    tracing::trace!(
        copies = expanded.len(),
        capacity,
        picked = selected.len(),
        "knapsack solved"
    );

    selected
}

/// Total weight of a selection
pub fn total_weight<T: KnapsackItem>(selection: &[&T]) -> u32 {
    selection.iter().map(|item| item.weight()).sum()
}

/// Total value of a selection
pub fn total_value<T: KnapsackItem>(selection: &[&T]) -> f64 {
    selection.iter().map(|item| item.value()).sum()
}
