//! Generic primal-dual cover engine.

use std::collections::BTreeSet;

use netlistx_core::{Cost, GapMap, Handle, NetlistError, WeightMap};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::PdConfig;

/// Primal cost of a solution together with the dual value that certifies it.
///
/// Weak duality guarantees `dual <= primal` for every run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Certificate<W> {
    /// Total weight charged for the selected elements.
    pub primal: W,
    /// Total dual value raised while selecting them.
    pub dual: W,
}

impl<W: Cost> Certificate<W> {
    /// Certificate of an empty run.
    pub fn zero() -> Self {
        Self {
            primal: W::ZERO,
            dual: W::ZERO,
        }
    }

    /// Records the selection of an element of weight `weight` paid with `paid`.
    pub(crate) fn charge(&mut self, weight: W, paid: W) {
        self.primal += weight;
        self.dual += paid;
    }

    /// Returns whether the weak duality bound holds.
    pub fn is_weakly_dual(&self) -> bool {
        !(self.dual > self.primal)
    }

    pub(crate) fn finish(self, algorithm: &'static str, selected: usize) -> Self {
        debug_assert!(
            self.is_weakly_dual(),
            "{algorithm}: dual {:?} exceeds primal {:?}",
            self.dual,
            self.primal
        );
        info!(algorithm, selected, primal = ?self.primal, dual = ?self.dual, "primal-dual run finished");
        self
    }
}

/// A solution set built from scratch together with its certificate.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<K, W> {
    /// Selected handles.
    pub set: BTreeSet<K>,
    /// Cost certificate of the run that produced `set`.
    pub certificate: Certificate<W>,
}

impl<K: Handle, W: Cost> Solution<K, W> {
    /// Runs `solve` against a fresh, empty solution set.
    pub fn from_scratch<F>(solve: F) -> Result<Self, NetlistError>
    where
        F: FnOnce(&mut BTreeSet<K>) -> Result<Certificate<W>, NetlistError>,
    {
        let mut set = BTreeSet::new();
        let certificate = solve(&mut set)?;
        Ok(Self { set, certificate })
    }

    /// Total primal cost of the solution.
    pub fn cost(&self) -> W {
        self.certificate.primal
    }
}

/// Source of violating sets for [`pd_cover`].
///
/// Every call may re-derive the violations from the current solution set.
/// Implemented for closures `FnMut(&BTreeSet<K>) -> Result<Vec<Vec<K>>, _>`.
pub trait ViolationSource<K> {
    /// Returns the constraints not yet satisfied by `solution`.
    fn violations(&mut self, solution: &BTreeSet<K>) -> Result<Vec<Vec<K>>, NetlistError>;
}

impl<K, F> ViolationSource<K> for F
where
    F: FnMut(&BTreeSet<K>) -> Result<Vec<Vec<K>>, NetlistError>,
{
    fn violations(&mut self, solution: &BTreeSet<K>) -> Result<Vec<Vec<K>>, NetlistError> {
        self(solution)
    }
}

/// Runs [`pd_cover_with`] under the default [`PdConfig`].
pub fn pd_cover<K, W, V>(
    violate: V,
    weight: &WeightMap<K, W>,
    soln: &mut BTreeSet<K>,
) -> Result<Certificate<W>, NetlistError>
where
    K: Handle,
    W: Cost,
    V: ViolationSource<K>,
{
    pd_cover_with(violate, weight, soln, &PdConfig::default())
}

/// Primal-dual approximation for covering problems.
///
/// For every violating set the member with the smallest remaining gap is
/// added to `soln` and its gap is deducted from every member of the set.
/// The source is queried once per round; the run ends after a round that
/// yields nothing, a round that adds no new element, or
/// `config.max_rounds` rounds.
pub fn pd_cover_with<K, W, V>(
    mut violate: V,
    weight: &WeightMap<K, W>,
    soln: &mut BTreeSet<K>,
    config: &PdConfig,
) -> Result<Certificate<W>, NetlistError>
where
    K: Handle,
    W: Cost,
    V: ViolationSource<K>,
{
    config.validate()?;
    let mut gap = GapMap::from_weights(weight);
    let mut certificate = Certificate::zero();
    let mut selected = 0usize;

    for round in 0..config.max_rounds {
        let sets = violate.violations(soln)?;
        if sets.is_empty() {
            break;
        }
        let before = soln.len();
        for set in sets {
            let members = distinct(set);
            let Some((min_vtx, min_val)) = gap.argmin(members.iter().copied())? else {
                continue;
            };
            soln.insert(min_vtx);
            certificate.charge(weight.get(min_vtx)?, min_val);
            selected += 1;
            for member in &members {
                gap.deduct(*member, min_val)?;
            }
            debug!(round, selected = ?min_vtx, paid = ?min_val, size = members.len(), "resolved violating set");
        }
        if soln.len() == before {
            break;
        }
    }

    Ok(certificate.finish("pd_cover", selected))
}

/// Fails with `missing-key` unless `weight` has an entry for every handle in
/// `0..count`.
pub(crate) fn ensure_weighted<K: Handle, W: Cost>(
    weight: &WeightMap<K, W>,
    count: usize,
) -> Result<(), NetlistError> {
    if weight.len() < count {
        return Err(
            NetlistError::weight("missing-key", "weight map does not cover every handle")
                .with_context(K::KIND, weight.len())
                .with_context("len", weight.len())
                .with_context("expected", count),
        );
    }
    Ok(())
}

/// Drops repeated handles while keeping first-occurrence order.
pub(crate) fn distinct<K: Handle>(items: impl IntoIterator<Item = K>) -> Vec<K> {
    let mut seen = BTreeSet::new();
    items.into_iter().filter(|item| seen.insert(*item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use netlistx_core::NodeId;

    #[test]
    fn distinct_keeps_first_occurrence() {
        let ids: Vec<NodeId> = [3, 1, 3, 2, 1].into_iter().map(NodeId::from_raw).collect();
        let raw: Vec<u64> = distinct(ids).iter().map(|id| id.as_raw()).collect();
        assert_eq!(raw, vec![3, 1, 2]);
    }

    #[test]
    fn certificate_charges_accumulate() {
        let mut cert: Certificate<u32> = Certificate::zero();
        cert.charge(3, 2);
        cert.charge(1, 1);
        assert_eq!(cert, Certificate { primal: 4, dual: 3 });
        assert!(cert.is_weakly_dual());
        assert!(!Certificate { primal: 1, dual: 2 }.is_weakly_dual());
    }
}
