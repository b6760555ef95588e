//! # Checkout State Machine
//!
//! Strict linear cycle with time-delayed transitions:
//!
//! ```text
//! [Idle] ──begin──→ [Submitting] ──ConfirmOrder──→ [Confirmed] ──ResetCart──→ [Idle]
//! ```
//!
//! The machine itself never sleeps. `begin` and `fire` hand back a
//! `ScheduledTransition` describing the next continuation; the driver
//! (`CartSession`) waits for `delay` and then fires its ticket.
//!
//! ## Generations
//!
//! Every ticket is stamped with the generation current when it was issued.
//! `begin` and `cancel_pending` advance the generation, so a continuation that
//! outlives its cycle (view torn down, checkout cancelled) is ignored when it
//! finally fires (INVARIANT-4).

use serde::Serialize;
use std::time::Duration;

/// Delay between submission and confirmation.
pub const SUBMISSION_DELAY: Duration = Duration::from_millis(2000);

/// Delay between confirmation and the cart reset.
pub const CONFIRMATION_DELAY: Duration = Duration::from_millis(3000);

/// Observable checkout state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub enum CheckoutState {
    /// Resting state; checkout may start.
    #[default]
    Idle,
    /// Simulated order submission in flight.
    Submitting,
    /// Order shown as complete; cart reset pending.
    Confirmed,
}

impl CheckoutState {
    /// True while a checkout cycle is in progress.
    pub fn is_busy(self) -> bool {
        !matches!(self, CheckoutState::Idle)
    }
}

/// Which automatic transition a ticket performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionKind {
    /// Submitting → Confirmed.
    ConfirmOrder,
    /// Confirmed → Idle, clearing the ledger.
    ResetCart,
}

/// Handle for one pending continuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionTicket {
    generation: u64,
    kind: TransitionKind,
}

impl TransitionTicket {
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }
}

/// A continuation to fire after `delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTransition {
    pub ticket: TransitionTicket,
    pub delay: Duration,
}

/// Result of firing a ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireOutcome {
    /// Moved to `Confirmed`; the reset is scheduled.
    Confirmed(ScheduledTransition),
    /// Moved to `Idle`; the owner must clear and persist the ledger.
    ResetRequired,
    /// Stale or out-of-order ticket; nothing changed.
    Ignored,
}

/// Checkout state machine for one cart session.
#[derive(Debug, Default)]
pub struct CheckoutMachine {
    state: CheckoutState,
    generation: u64,
}

impl CheckoutMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Start a checkout.
    ///
    /// Returns `None` (and changes nothing) when the cart is empty or a
    /// cycle is already in progress (INVARIANT-3).
    pub fn begin(&mut self, total_items: u64) -> Option<ScheduledTransition> {
        if self.state.is_busy() || total_items == 0 {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.state = CheckoutState::Submitting;
        Some(self.schedule(TransitionKind::ConfirmOrder, SUBMISSION_DELAY))
    }

    /// Perform the transition a ticket was issued for.
    pub fn fire(&mut self, ticket: TransitionTicket) -> FireOutcome {
        if ticket.generation != self.generation {
            return FireOutcome::Ignored;
        }

        match (self.state, ticket.kind) {
            (CheckoutState::Submitting, TransitionKind::ConfirmOrder) => {
                self.state = CheckoutState::Confirmed;
                FireOutcome::Confirmed(self.schedule(TransitionKind::ResetCart, CONFIRMATION_DELAY))
            }
            (CheckoutState::Confirmed, TransitionKind::ResetCart) => {
                self.state = CheckoutState::Idle;
                FireOutcome::ResetRequired
            }
            _ => FireOutcome::Ignored,
        }
    }

    /// Invalidate outstanding tickets and return to `Idle`.
    ///
    /// Returns true if a cycle was in progress.
    pub fn cancel_pending(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        let was_busy = self.state.is_busy();
        self.state = CheckoutState::Idle;
        was_busy
    }

    fn schedule(&self, kind: TransitionKind, delay: Duration) -> ScheduledTransition {
        ScheduledTransition {
            ticket: TransitionTicket {
                generation: self.generation,
                kind,
            },
            delay,
        }
    }
}
