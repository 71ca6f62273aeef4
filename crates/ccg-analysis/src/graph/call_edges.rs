//! Call Edge Set: caller name -> callee names, in insertion order.

use rustc_hash::FxHashMap;

/// Callers are kept in the order they first called anything; each
/// caller's callees keep one entry per call site.
#[derive(Debug, Clone, Default)]
pub struct CallEdges {
    order: Vec<String>,
    callees: FxHashMap<String, Vec<String>>,
}

impl CallEdges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, caller: &str, callee: &str) {
        match self.callees.get_mut(caller) {
            Some(list) => list.push(callee.to_string()),
            None => {
                self.order.push(caller.to_string());
                self.callees
                    .insert(caller.to_string(), vec![callee.to_string()]);
            }
        }
    }

    /// Callees of `caller`; empty when it never called anything.
    pub fn callees(&self, caller: &str) -> &[String] {
        self.callees.get(caller).map_or(&[][..], Vec::as_slice)
    }

    /// Linear scan: one entry per call site of `callee`.
    pub fn callers_of(&self, callee: &str) -> Vec<String> {
        let mut callers = Vec::new();
        for (caller, callees) in self.iter() {
            let hits = callees.iter().filter(|c| *c == callee).count();
            callers.extend(std::iter::repeat(caller.to_string()).take(hits));
        }
        callers
    }

    /// Callers in first-insertion order with their callees.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order.iter().map(|caller| {
            let callees = self.callees.get(caller).map_or(&[][..], Vec::as_slice);
            (caller.as_str(), callees)
        })
    }

    /// Number of callers.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total call-site entries across all callers.
    pub fn edge_count(&self) -> usize {
        self.callees.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callers_repeat_per_call_site() {
        let mut edges = CallEdges::new();
        edges.push("a", "b");
        edges.push("c", "b");
        edges.push("a", "b");

        assert_eq!(edges.callers_of("b"), vec!["a", "a", "c"]);
        assert_eq!(edges.callees("a"), ["b", "b"]);
        assert_eq!(edges.edge_count(), 3);
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn test_unknown_names_are_empty() {
        let edges = CallEdges::new();
        assert!(edges.callers_of("missing").is_empty());
        assert!(edges.callees("missing").is_empty());
        assert!(edges.is_empty());
    }

    #[test]
    fn test_iter_keeps_first_insertion_order() {
        let mut edges = CallEdges::new();
        edges.push("zed", "x");
        edges.push("alpha", "y");
        edges.push("zed", "z");

        let callers: Vec<_> = edges.iter().map(|(caller, _)| caller).collect();
        assert_eq!(callers, vec!["zed", "alpha"]);
    }
}
