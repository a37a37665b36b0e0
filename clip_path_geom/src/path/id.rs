use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque identifier of a path or path node.
///
/// Stays the same across immutable edits of the element it identifies.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ElementId(Uuid);

impl ElementId {
    /// New random (UUID v4) id.
    #[inline]
    pub fn new_random() -> Self {
        ElementId(Uuid::new_v4())
    }

    /// Id with a well known UUID.
    #[inline]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        ElementId(uuid)
    }

    #[inline]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Strategy used to hand out ids for newly created elements (e.g. paths built by a boolean
/// operation).
pub trait IdSource: fmt::Debug {
    fn next_id(&self) -> ElementId;
}

/// Random UUID v4 ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    #[inline]
    fn next_id(&self) -> ElementId {
        ElementId::new_random()
    }
}

/// Deterministic ids from an incrementing counter, `n` maps to `Uuid::from_u128(n)`.
///
/// # Examples
///
/// ```
/// # use clip_path_geom::path::*;
/// let ids = SequentialIds::starting_at(7);
/// assert_eq!(ids.next_id().as_uuid().as_u128(), 7);
/// assert_eq!(ids.next_id().as_uuid().as_u128(), 8);
/// ```
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    /// Counter starting at 1 (the nil UUID is never handed out).
    #[inline]
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    #[inline]
    pub fn starting_at(first: u64) -> Self {
        SequentialIds {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    #[inline]
    fn next_id(&self) -> ElementId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        ElementId::from_uuid(Uuid::from_u128(n as u128))
    }
}
