//! Marker-class toggling
//!
//! A checked field is in exactly one of two states: the marker class is
//! present (last check failed) or absent (last check passed, or never
//! checked). Adding and removing are both idempotent, so re-checking an
//! unchanged value never flips the state.

use std::collections::BTreeSet;
use std::convert::Infallible;

use crate::field::FieldKind;

/// Default token used to flag an invalid field.
pub const DEFAULT_MARKER_CLASS: &str = "is-invalid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerState {
    Unmarked,
    MarkedInvalid,
}

impl MarkerState {
    pub fn is_marked(self) -> bool {
        matches!(self, MarkerState::MarkedInvalid)
    }
}

/// A set of class tokens on some element.
pub trait ClassList {
    type Error;

    fn add(&mut self, token: &str) -> Result<(), Self::Error>;
    fn remove(&mut self, token: &str) -> Result<(), Self::Error>;
    fn contains(&self, token: &str) -> bool;

    /// Current state with respect to `marker`.
    fn marker_state(&self, marker: &str) -> MarkerState {
        if self.contains(marker) {
            MarkerState::MarkedInvalid
        } else {
            MarkerState::Unmarked
        }
    }
}

impl ClassList for BTreeSet<String> {
    type Error = Infallible;

    fn add(&mut self, token: &str) -> Result<(), Infallible> {
        self.insert(token.to_string());
        Ok(())
    }

    fn remove(&mut self, token: &str) -> Result<(), Infallible> {
        BTreeSet::remove(self, token);
        Ok(())
    }

    fn contains(&self, token: &str) -> bool {
        BTreeSet::contains(self, token)
    }
}

/// Adds `marker` when `valid` is false, removes it otherwise.
pub fn apply_marker<C: ClassList + ?Sized>(
    classes: &mut C,
    marker: &str,
    valid: bool,
) -> Result<MarkerState, C::Error> {
    let before = classes.marker_state(marker);

    let after = if valid {
        classes.remove(marker)?;
        MarkerState::Unmarked
    } else {
        classes.add(marker)?;
        MarkerState::MarkedInvalid
    };

    if before != after {
        tracing::trace!(marker, ?before, ?after, "marker state changed");
    }

    Ok(after)
}

/// Tests `value` against the field's pattern and updates the marker.
pub fn check_field<C: ClassList + ?Sized>(
    kind: FieldKind,
    value: &str,
    classes: &mut C,
    marker: &str,
) -> Result<MarkerState, C::Error> {
    apply_marker(classes, marker, kind.is_valid(value))
}
