//! CalculateSplitHandler - Command handler for allocating a fare.
//!
//! Runs the allocator and records the outcome. There are no ports: the
//! allocation is a pure function of the command.

use crate::domain::foundation::ValidationError;
use crate::domain::split::{Allocation, AllocationRequest, Allocator};

/// Command to split a fare.
#[derive(Debug, Clone)]
pub struct CalculateSplitCommand {
    pub request: AllocationRequest,
}

/// Result of a successful split.
pub type CalculateSplitResult = Allocation;

/// Handler for splitting a fare among participants.
#[derive(Debug, Clone, Default)]
pub struct CalculateSplitHandler;

impl CalculateSplitHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        cmd: CalculateSplitCommand,
    ) -> Result<CalculateSplitResult, ValidationError> {
        match Allocator::allocate(&cmd.request) {
            Ok(allocation) => {
                tracing::debug!(
                    mode = %allocation.mode,
                    participants = allocation.results.len(),
                    total = allocation.total,
                    remainder = allocation.remainder,
                    "Fare split calculated"
                );
                Ok(allocation)
            }
            Err(e) => {
                tracing::debug!(
                    code = e.code(),
                    participants = cmd.request.participants.len(),
                    "Fare split rejected: {}",
                    e
                );
                Err(e)
            }
        }
    }
}
