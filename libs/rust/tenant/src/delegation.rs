//! Partial delegation arithmetic for tokens that split voting power across
//! several delegatees by fraction of a fixed denominator.

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

pub const DENOMINATOR: u16 = 10_000;
pub const MAX_DELEGATEES: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DelegationError {
    #[error("at most 100 delegatees allowed, got {0}")]
    TooManyDelegatees(usize),

    #[error("delegatee {0} appears more than once")]
    DuplicateDelegatee(Address),

    #[error("numerators sum to {0}, exceeding 10000")]
    ExceedsDenominator(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialDelegation {
    pub delegatee: Address,
    pub numerator: u16,
}

impl PartialDelegation {
    pub fn new(delegatee: Address, numerator: u16) -> Self {
        Self {
            delegatee,
            numerator,
        }
    }

    /// Numerator for a percentage, rounded down to the nearest basis point.
    pub fn from_percent(delegatee: Address, percent: f64) -> Self {
        let numerator = (percent.clamp(0.0, 100.0) * f64::from(DENOMINATOR) / 100.0).floor() as u16;
        Self::new(delegatee, numerator)
    }
}

/// Drops zero entries, sorts ascending by delegatee and checks the
/// contract's constraints.
pub fn normalize(
    delegations: impl IntoIterator<Item = PartialDelegation>,
) -> Result<Vec<PartialDelegation>, DelegationError> {
    let mut delegations: Vec<_> = delegations
        .into_iter()
        .filter(|delegation| delegation.numerator > 0)
        .collect();
    delegations.sort_by_key(|delegation| delegation.delegatee);

    if delegations.len() > MAX_DELEGATEES {
        return Err(DelegationError::TooManyDelegatees(delegations.len()));
    }
    if let Some(pair) = delegations
        .windows(2)
        .find(|pair| pair[0].delegatee == pair[1].delegatee)
    {
        return Err(DelegationError::DuplicateDelegatee(pair[0].delegatee));
    }
    let total: u32 = delegations.iter().map(|d| u32::from(d.numerator)).sum();
    if total > u32::from(DENOMINATOR) {
        return Err(DelegationError::ExceedsDenominator(total));
    }

    Ok(delegations)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub shares: Vec<(Address, U256)>,
    /// Voting power that stays with the delegator.
    pub retained: U256,
}

pub fn allocate(
    voting_power: U256,
    delegations: impl IntoIterator<Item = PartialDelegation>,
) -> Result<Allocation, DelegationError> {
    let delegations = normalize(delegations)?;
    let denominator = U256::from(DENOMINATOR);

    let shares: Vec<(Address, U256)> = delegations
        .iter()
        .map(|delegation| {
            // split so the product cannot overflow for any voting power
            let numerator = U256::from(delegation.numerator);
            let share = voting_power / denominator * numerator
                + voting_power % denominator * numerator / denominator;
            (delegation.delegatee, share)
        })
        .collect();
    let delegated = shares
        .iter()
        .fold(U256::ZERO, |acc, (_, share)| acc + *share);

    Ok(Allocation {
        shares,
        retained: voting_power - delegated,
    })
}
