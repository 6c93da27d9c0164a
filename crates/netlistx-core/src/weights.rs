//! Dense weight and gap ledgers indexed by [`Handle`].

use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::errors::NetlistError;
use crate::Handle;

/// Numeric cost carried by weight and gap ledgers.
///
/// Implemented for the unsigned, signed and floating point primitives. Costs
/// are expected to be non-negative.
pub trait Cost:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
{
    /// Additive identity.
    const ZERO: Self;
}

macro_rules! impl_cost {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Cost for $ty {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_cost!(
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, usize => 0,
    i32 => 0, i64 => 0,
    f32 => 0.0, f64 => 0.0,
);

fn missing_key<K: Handle>(key: K, len: usize) -> NetlistError {
    NetlistError::weight("missing-key", "handle is outside the ledger universe")
        .with_context(K::KIND, key.index())
        .with_context("len", len)
}

/// Read-only mapping from a handle to its cost.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMap<K, W> {
    values: Vec<W>,
    _key: PhantomData<fn(K)>,
}

impl<K: Handle, W: Cost> WeightMap<K, W> {
    /// Wraps a dense vector; entry `i` is the weight of `K::from_index(i)`.
    pub fn from_vec(values: Vec<W>) -> Self {
        Self {
            values,
            _key: PhantomData,
        }
    }

    /// Assigns the same weight to every handle in `0..len`.
    pub fn uniform(len: usize, weight: W) -> Self {
        Self::from_vec(vec![weight; len])
    }

    /// Builds the ledger by evaluating `f` for every handle in `0..len`.
    pub fn from_fn(len: usize, mut f: impl FnMut(K) -> W) -> Self {
        Self::from_vec((0..len).map(|idx| f(K::from_index(idx))).collect())
    }

    /// Returns the weight of `key`, or a `missing-key` error.
    pub fn get(&self, key: K) -> Result<W, NetlistError> {
        self.values
            .get(key.index())
            .copied()
            .ok_or_else(|| missing_key(key, self.values.len()))
    }

    /// Number of handles covered by the ledger.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates `(handle, weight)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (K, W)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(idx, w)| (K::from_index(idx), *w))
    }

    /// Sums the weights of `keys`.
    pub fn total<I>(&self, keys: I) -> Result<W, NetlistError>
    where
        I: IntoIterator<Item = K>,
    {
        keys.into_iter()
            .try_fold(W::ZERO, |acc, key| Ok(acc + self.get(key)?))
    }
}

/// Mutable dual slack ledger, created from a [`WeightMap`] for one solver run.
///
/// Values only ever decrease and never drop below zero.
#[derive(Debug, Clone, PartialEq)]
pub struct GapMap<K, W> {
    values: Vec<W>,
    _key: PhantomData<fn(K)>,
}

impl<K: Handle, W: Cost> GapMap<K, W> {
    /// Starts a fresh ledger equal to `weights`.
    pub fn from_weights(weights: &WeightMap<K, W>) -> Self {
        Self {
            values: weights.values.clone(),
            _key: PhantomData,
        }
    }

    /// Returns the remaining gap of `key`.
    pub fn get(&self, key: K) -> Result<W, NetlistError> {
        self.values
            .get(key.index())
            .copied()
            .ok_or_else(|| missing_key(key, self.values.len()))
    }

    /// Subtracts `delta` from the gap of `key`.
    ///
    /// Fails with `negative-gap` if the gap would drop below zero; callers
    /// only ever deduct the minimum of a set they belong to.
    pub fn deduct(&mut self, key: K, delta: W) -> Result<(), NetlistError> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(key.index())
            .ok_or_else(|| missing_key(key, len))?;
        if *slot < delta {
            return Err(
                NetlistError::weight("negative-gap", "gap deduction exceeds remaining slack")
                    .with_context(K::KIND, key.index())
                    .with_context("gap", format!("{:?}", *slot))
                    .with_context("delta", format!("{delta:?}")),
            );
        }
        *slot -= delta;
        Ok(())
    }

    /// Marks `key` as fully paid.
    pub fn clear(&mut self, key: K) -> Result<(), NetlistError> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(key.index())
            .ok_or_else(|| missing_key(key, len))?;
        *slot = W::ZERO;
        Ok(())
    }

    /// Returns the first member of `keys` with the smallest gap and that gap.
    ///
    /// Later members only win on a strictly smaller gap, so ties resolve to
    /// iteration order.
    pub fn argmin<I>(&self, keys: I) -> Result<Option<(K, W)>, NetlistError>
    where
        I: IntoIterator<Item = K>,
    {
        let mut best: Option<(K, W)> = None;
        for key in keys {
            let gap = self.get(key)?;
            match best {
                Some((_, current)) if !(gap < current) => {}
                _ => best = Some((key, gap)),
            }
        }
        Ok(best)
    }
}
