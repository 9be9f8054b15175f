//! Permutation crossover and mutation operators.
//!
//! # Encoding
//!
//! A chromosome is a permutation of occurrence indices `0..N`. Operators
//! never see job types, so every child is a permutation of the same
//! occurrence set as its parents.
//!
//! Cut points are fixed: the window `[CUT_START, CUT_END)` for PMX and
//! inversion, `[CUT_START, max(1, N/2))` for OX, and a midpoint one-point
//! cut for PMX on short chromosomes.
//!
//! # Reference
//! - Goldberg & Lingle (1985), "Alleles, loci, and the TSP" (PMX)
//! - Davis (1985), "Applying adaptive algorithms to epistatic domains" (OX)

use std::collections::{HashMap, HashSet};

use rand::Rng;

/// First position of the fixed crossover/inversion window.
pub const CUT_START: usize = 1;
/// End (exclusive) of the fixed PMX/inversion window.
pub const CUT_END: usize = 3;
/// Farthest position swap mutation exchanges with `CUT_START`.
pub const SWAP_REACH: usize = 3;
/// Chromosomes up to this length use the one-point PMX fallback.
pub const PMX_SHORT_LEN: usize = 4;

/// Whether `sequence` is a permutation of `0..n`.
pub fn is_permutation(sequence: &[usize], n: usize) -> bool {
    if sequence.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in sequence {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

// ======================== Crossover operators ========================

/// Performs PMX (Partially Mapped Crossover).
///
/// - `N <= 1`: copies of the parents.
/// - `2 <= N <= 4`: one-point crossover at `N / 2`, keeping the child a
///   permutation.
/// - `N > 4`: swaps the window `[1, 3)` between the parents, then resolves
///   every value outside the window through the swap mapping until it no
///   longer collides.
pub fn pmx_crossover(p1: &[usize], p2: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let size = p1.len();

    if size <= 1 {
        return (p1.to_vec(), p2.to_vec());
    }
    if size <= PMX_SHORT_LEN {
        let cut = size / 2;
        return (one_point(p1, p2, cut), one_point(p2, p1, cut));
    }

    let mut child1 = p1.to_vec();
    let mut child2 = p2.to_vec();
    let mut mapping1: HashMap<usize, usize> = HashMap::new();
    let mut mapping2: HashMap<usize, usize> = HashMap::new();

    for i in CUT_START..CUT_END {
        child1[i] = p2[i];
        child2[i] = p1[i];
        mapping1.insert(p2[i], p1[i]);
        mapping2.insert(p1[i], p2[i]);
    }

    pmx_repair(&mut child1, &mapping1);
    pmx_repair(&mut child2, &mapping2);

    (child1, child2)
}

/// One-point crossover: `head[..cut]`, then `tail[cut..]`.
///
/// Values of `tail[cut..]` already taken from `head` are skipped and the
/// missing ones are taken from `tail[..cut]` in order, so the child stays a
/// permutation. When the plain splice is already a permutation it is
/// returned unchanged.
fn one_point(head: &[usize], tail: &[usize], cut: usize) -> Vec<usize> {
    let mut child = head[..cut].to_vec();
    let mut present: HashSet<usize> = child.iter().copied().collect();
    for &value in tail[cut..].iter().chain(&tail[..cut]) {
        if present.insert(value) {
            child.push(value);
        }
    }
    child
}

/// Follows the mapping chain for every position outside the window.
///
/// The mapping is injective and its chains start outside its image, so
/// every chain ends.
fn pmx_repair(child: &mut [usize], mapping: &HashMap<usize, usize>) {
    for (i, gene) in child.iter_mut().enumerate() {
        if (CUT_START..CUT_END).contains(&i) {
            continue;
        }
        let mut current = *gene;
        while let Some(&next) = mapping.get(&current) {
            current = next;
        }
        *gene = current;
    }
}

/// Performs OX (Order Crossover).
///
/// - `N <= 2`: copies of the parents.
/// - Otherwise keeps the window `[1, max(1, N/2))` of one parent in place
///   and fills the other positions, starting after the window and wrapping,
///   with the other parent's values in its wrap-around order from the same
///   point.
pub fn ox_crossover(p1: &[usize], p2: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let size = p1.len();

    if size <= 2 {
        return (p1.to_vec(), p2.to_vec());
    }

    let cut_end = (size / 2).max(1);
    let mut child1: Vec<Option<usize>> = vec![None; size];
    let mut child2: Vec<Option<usize>> = vec![None; size];

    for i in CUT_START..cut_end {
        child1[i] = Some(p1[i]);
        child2[i] = Some(p2[i]);
    }

    ox_fill(&mut child1, p2, cut_end);
    ox_fill(&mut child2, p1, cut_end);

    (
        child1.into_iter().flatten().collect(),
        child2.into_iter().flatten().collect(),
    )
}

/// Fills the unset slots of `child` from `source`.
///
/// Reads `source` cyclically from `start`, writing each value not yet in
/// `child` into the next free slot (also cyclic from `start`). Reading stops
/// once the child is full or after `2 * source.len()` reads; any slot still
/// free is then given the first unused `source` value in source order.
fn ox_fill(child: &mut [Option<usize>], source: &[usize], start: usize) {
    let size = child.len();
    if size == 0 || source.is_empty() {
        return;
    }

    let mut present: HashSet<usize> = child.iter().flatten().copied().collect();
    let mut free = child.iter().filter(|g| g.is_none()).count();
    let mut fill_pos = start % size;
    let mut read_pos = start % source.len();
    let mut reads = 0;

    while free > 0 && reads <= 2 * source.len() {
        let value = source[read_pos];
        if present.insert(value) {
            while child[fill_pos].is_some() {
                fill_pos = (fill_pos + 1) % size;
            }
            child[fill_pos] = Some(value);
            fill_pos = (fill_pos + 1) % size;
            free -= 1;
        }
        read_pos = (read_pos + 1) % source.len();
        reads += 1;
    }

    if free == 0 {
        return;
    }
    for slot in child.iter_mut().filter(|g| g.is_none()) {
        if let Some(&value) = source.iter().find(|v| !present.contains(v)) {
            present.insert(value);
            *slot = Some(value);
        }
    }
}

// ======================== Mutation operators ========================

/// Inversion mutation: with probability `rate`, reverses positions `[1, 3)`.
///
/// No-op for chromosomes shorter than 3; no draw is made below length 2.
pub fn inversion_mutation<R: Rng>(sequence: &[usize], rate: f64, rng: &mut R) -> Vec<usize> {
    let mut mutated = sequence.to_vec();
    if mutated.len() < 2 {
        return mutated;
    }
    if rng.random::<f64>() < rate && CUT_END <= mutated.len() {
        mutated[CUT_START..CUT_END].reverse();
    }
    mutated
}

/// Swap mutation: with probability `rate`, exchanges positions 1 and `min(3, N-1)`.
///
/// No draw is made below length 2.
pub fn swap_mutation<R: Rng>(sequence: &[usize], rate: f64, rng: &mut R) -> Vec<usize> {
    let mut mutated = sequence.to_vec();
    if mutated.len() < 2 {
        return mutated;
    }
    if rng.random::<f64>() < rate {
        let far = SWAP_REACH.min(mutated.len() - 1);
        mutated.swap(CUT_START, far);
    }
    mutated
}
