use std::collections::HashSet;

use crate::expression::Number;

/// Every way of inserting `x` into `ns`, starting at the front.
pub fn interleave(x: Number, ns: &[Number]) -> Vec<Vec<Number>> {
    let Some((&y, ys)) = ns.split_first() else {
        return vec![vec![x]];
    };

    let mut out = Vec::with_capacity(ns.len() + 1);
    let mut front = Vec::with_capacity(ns.len() + 1);
    front.push(x);
    front.extend_from_slice(ns);
    out.push(front);

    for rest in interleave(x, ys) {
        let mut seq = Vec::with_capacity(rest.len() + 1);
        seq.push(y);
        seq.extend(rest);
        out.push(seq);
    }
    out
}

/// All orderings of `ns`, built by interleaving the head into every
/// ordering of the tail. The empty slice has exactly one ordering.
pub fn perms(ns: &[Number]) -> Vec<Vec<Number>> {
    let Some((&x, xs)) = ns.split_first() else {
        return vec![Vec::new()];
    };

    perms(xs)
        .iter()
        .flat_map(|p| interleave(x, p))
        .collect()
}

/// Orderings of `ns` with structurally equal sequences emitted once.
pub(crate) fn distinct_perms(ns: &[Number]) -> Vec<Vec<Number>> {
    let all = perms(ns);
    let unique: HashSet<&Number> = ns.iter().collect();
    if unique.len() == ns.len() {
        return all;
    }

    let mut seen = HashSet::with_capacity(all.len());
    all.into_iter().filter(|p| seen.insert(p.clone())).collect()
}
