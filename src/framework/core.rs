//! # Core Ownership Framework
//!
//! This module defines the generic building blocks for the ownership recipe.
//!
//! ## Key Types
//!
//! - [`Slot`]: A container that owns at most one value.
//! - [`Borrows`]: The trait a role implements to receive a lent slot.
//! - [`Consumes`]: The trait a role implements to take final ownership.
//! - [`OwnershipError`]: The single hazard class (use of an empty slot).

use tracing::trace;

// =============================================================================
// 1. THE ERRORS
// =============================================================================

/// Errors that can occur when touching an ownership slot.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum OwnershipError {
    /// The slot was accessed after its value had been moved out.
    #[error("Slot is vacant: {context}")]
    VacantSlot { context: &'static str },
}

// =============================================================================
// 2. THE SLOT
// =============================================================================

/// A single-value owning container.
///
/// # Architecture Note
/// A `Slot` is the sole legitimate access path to the value it holds. Moving the
/// value out (via [`Slot::take`] or [`Slot::take_checked`]) leaves the slot empty
/// in the same call, so there is never a window where two slots both consider
/// themselves the owner.
///
/// Lending a slot means handing out `&mut Slot<T>`. The receiver may read through
/// it, leave it alone, or move the value out. The lender must call
/// [`Slot::is_occupied`] afterwards before acting on the contents.
#[derive(Debug)]
pub struct Slot<T> {
    value: Option<T>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Slot<T> {
    /// Creates a slot holding nothing.
    pub fn empty() -> Self {
        Self { value: None }
    }

    /// Returns `true` while the slot owns a value.
    pub fn is_occupied(&self) -> bool {
        self.value.is_some()
    }

    /// Installs `value`, returning whatever was displaced.
    pub fn fill(&mut self, value: T) -> Option<T> {
        trace!(displaced = self.value.is_some(), "Slot filled");
        self.value.replace(value)
    }

    /// Moves the value out, leaving the slot empty.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Like [`Slot::take`], but an empty slot is reported as an error.
    pub fn take_checked(&mut self) -> Result<T, OwnershipError> {
        self.value.take().ok_or(OwnershipError::VacantSlot {
            context: "take from empty slot",
        })
    }

    /// Checked read access.
    pub fn get(&self) -> Result<&T, OwnershipError> {
        self.value.as_ref().ok_or(OwnershipError::VacantSlot {
            context: "read through empty slot",
        })
    }

    /// Drops the held value, if any.
    pub fn clear(&mut self) {
        self.value = None;
    }
}

// =============================================================================
// 3. THE ROLE SEAMS
// =============================================================================

/// A role that temporarily receives a lent slot.
///
/// Implementors may read through the slot and may move the value out of it.
/// Whatever they leave behind belongs to the lender again when the call returns.
pub trait Borrows<T> {
    fn borrow(&mut self, slot: &mut Slot<T>) -> Result<(), OwnershipError>;
}

/// A role that takes permanent ownership of a value.
///
/// The value is passed by move, so a consumer can never be handed an empty slot.
pub trait Consumes<T> {
    fn consume(&mut self, value: T);
}
