//! Allocator - Proportional fare allocation with remainder correction.
//!
//! The allocator is a pure function of its input. It validates the request
//! field by field, computes each participant's real-valued share, rounds each
//! pay half away from zero, and hands the whole rounding remainder to the
//! last participant in input order so that the pays sum to the rounded total.

use serde::Serialize;

use crate::domain::foundation::{Share, ValidationError};

use super::mode::SplitMode;
use super::participant::ParticipantInput;

/// Minimum number of participants in a split.
pub const MIN_PARTICIPANTS: usize = 2;

/// Maximum number of participants in a split.
pub const MAX_PARTICIPANTS: usize = 10;

/// Exclusive upper bound on the total (2^63).
///
/// Below it every rounded pay fits in `i64`. Rounded `f64` values are whole
/// numbers, so the conversion is exact.
pub const TOTAL_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Unvalidated allocation request.
///
/// `mode` stays a string so that an unknown mode is reported in its place in
/// the validation order, after the total and participant count.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationRequest {
    pub total: f64,
    pub mode: String,
    pub participants: Vec<ParticipantInput>,
}

impl AllocationRequest {
    /// Creates a request.
    pub fn new(
        total: f64,
        mode: impl Into<String>,
        participants: Vec<ParticipantInput>,
    ) -> Self {
        Self {
            total,
            mode: mode.into(),
            participants,
        }
    }
}

/// One participant's line in an allocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantShare {
    pub name: String,
    /// The parsed value, or 1 in equal mode.
    pub value: f64,
    pub share: Share,
    pub pay: i64,
}

/// Result of a successful allocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    /// The total rounded half away from zero.
    pub total: i64,
    pub mode: SplitMode,
    /// One entry per participant, in input order.
    pub results: Vec<ParticipantShare>,
    pub sum_pay: i64,
    /// Amount added to the last participant's rounded pay.
    #[serde(skip)]
    pub remainder: i64,
}

/// A participant after validation.
#[derive(Debug, Clone)]
struct ValidParticipant {
    name: String,
    value: f64,
}

/// Stateless fare allocator.
pub struct Allocator;

impl Allocator {
    /// Allocates `request.total` among the request's participants.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking in order: the
    /// total, the participant count, the mode, each participant's value, and
    /// finally the sum of values and the resulting shares.
    pub fn allocate(request: &AllocationRequest) -> Result<Allocation, ValidationError> {
        let total = Self::validate_total(request.total)?;
        Self::validate_count(request.participants.len())?;
        let mode: SplitMode = request.mode.parse()?;
        let participants = Self::validate_participants(&request.participants, mode)?;

        let denominator = Self::denominator(&participants, mode)?;

        let shares: Vec<Share> = participants
            .iter()
            .map(|p| match mode {
                SplitMode::Equal => Share::of(1.0, denominator),
                _ => Share::of(p.value, denominator),
            })
            .collect();

        // Extreme magnitudes underflow a share to zero, or overflow the sum
        // and zero every share.
        if shares.iter().any(|share| share.as_fraction() <= 0.0) {
            return Err(ValidationError::ValuesOutOfRange);
        }

        let mut pays: Vec<i64> = shares
            .iter()
            .map(|share| round_half_away(total * share.as_fraction()))
            .collect();

        // Near the limit the rounded pays may sum past i64::MAX.
        let rounded_total = round_half_away(total);
        let pays_sum: i128 = pays.iter().map(|&pay| i128::from(pay)).sum();
        let remainder = i128::from(rounded_total) - pays_sum;
        if remainder != 0 {
            if let Some(last) = pays.last_mut() {
                // The corrected pay is the total minus the other pays, which
                // stays within i64.
                *last = (i128::from(*last) + remainder) as i64;
            }
        }

        let results: Vec<ParticipantShare> = participants
            .into_iter()
            .zip(shares)
            .zip(pays)
            .map(|((participant, share), pay)| ParticipantShare {
                name: participant.name,
                value: participant.value,
                share,
                pay,
            })
            .collect();

        let sum_pay: i128 = results.iter().map(|r| i128::from(r.pay)).sum();

        Ok(Allocation {
            total: rounded_total,
            mode,
            results,
            sum_pay: sum_pay as i64,
            remainder: remainder as i64,
        })
    }

    fn validate_total(total: f64) -> Result<f64, ValidationError> {
        if !total.is_finite() || total <= 0.0 {
            return Err(ValidationError::InvalidTotal);
        }
        if total >= TOTAL_LIMIT {
            return Err(ValidationError::TotalTooLarge);
        }
        Ok(total)
    }

    fn validate_count(count: usize) -> Result<(), ValidationError> {
        if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&count) {
            return Err(ValidationError::participant_count(
                MIN_PARTICIPANTS,
                MAX_PARTICIPANTS,
                count,
            ));
        }
        Ok(())
    }

    fn validate_participants(
        participants: &[ParticipantInput],
        mode: SplitMode,
    ) -> Result<Vec<ValidParticipant>, ValidationError> {
        let mut valid = Vec::with_capacity(participants.len());
        for (index, participant) in participants.iter().enumerate() {
            let name = participant.resolved_name(index);
            let value = if mode.is_proportional() {
                match participant.value.positive() {
                    Some(value) => value,
                    None => return Err(ValidationError::invalid_participant_value(index, name)),
                }
            } else {
                1.0
            };
            valid.push(ValidParticipant { name, value });
        }
        Ok(valid)
    }

    fn denominator(
        participants: &[ValidParticipant],
        mode: SplitMode,
    ) -> Result<f64, ValidationError> {
        if !mode.is_proportional() {
            return Ok(participants.len() as f64);
        }

        let sum: f64 = participants.iter().map(|p| p.value).sum();
        if sum <= 0.0 {
            return Err(ValidationError::NonPositiveDenominator);
        }
        Ok(sum)
    }
}

/// Rounds to the nearest integer, halves away from zero.
///
/// Callers guarantee `|value| < TOTAL_LIMIT`, so the cast is exact.
fn round_half_away(value: f64) -> i64 {
    value.round() as i64
}
