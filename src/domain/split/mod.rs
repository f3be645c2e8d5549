//! Split module - Fare allocation among participants.
//!
//! - `mode` - The three allocation strategies
//! - `participant` - Raw participant input and name resolution
//! - `allocator` - Validation and the remainder-corrected allocation
//! - `summary` - Plain-text rendering with currency formatting

mod allocator;
mod mode;
mod participant;
mod summary;

pub use allocator::{
    Allocation, AllocationRequest, Allocator, ParticipantShare, MAX_PARTICIPANTS, TOTAL_LIMIT,
    MIN_PARTICIPANTS,
};
pub use mode::SplitMode;
pub use participant::{ParticipantInput, ParticipantValue, DEFAULT_NAME_PREFIX};
pub use summary::{render_summary, CurrencyFormat, SymbolPosition};
