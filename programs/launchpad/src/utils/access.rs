//! Capability resolution. Each entry point resolves the signer to a `Role`
//! against the keys stored on the account it touches, then checks the role.

use anchor_lang::prelude::*;

use crate::error::{LaunchpadError, LaunchpadResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Operator,
    Worker,
    /// The sale PDA holding a vesting pool's credit capability.
    Creditor,
    Public,
}

impl Role {
    /// `worker` and `creditor` may be the null key (unassigned); the null key
    /// never resolves to a role.
    pub fn resolve(signer: &Pubkey, operator: &Pubkey, worker: &Pubkey, creditor: &Pubkey) -> Self {
        let assigned = |k: &Pubkey| *k != Pubkey::default() && k == signer;
        if signer == operator {
            Role::Operator
        } else if assigned(worker) {
            Role::Worker
        } else if assigned(creditor) {
            Role::Creditor
        } else {
            Role::Public
        }
    }

    pub fn require_operator(self) -> LaunchpadResult<()> {
        match self {
            Role::Operator => Ok(()),
            _ => Err(LaunchpadError::UnauthorizedOperator),
        }
    }

    pub fn require_operator_or_worker(self) -> LaunchpadResult<()> {
        match self {
            Role::Operator | Role::Worker => Ok(()),
            _ => Err(LaunchpadError::UnauthorizedOperatorOrWorker),
        }
    }

    pub fn require_creditor(self) -> LaunchpadResult<()> {
        match self {
            Role::Creditor => Ok(()),
            _ => Err(LaunchpadError::UnauthorizedCreditor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    #[test]
    fn resolves_roles() {
        let (op, worker, sale) = (key(1), key(2), key(3));
        assert_eq!(Role::resolve(&op, &op, &worker, &sale), Role::Operator);
        assert_eq!(Role::resolve(&worker, &op, &worker, &sale), Role::Worker);
        assert_eq!(Role::resolve(&sale, &op, &worker, &sale), Role::Creditor);
        assert_eq!(Role::resolve(&key(9), &op, &worker, &sale), Role::Public);
    }

    #[test]
    fn null_key_is_never_a_worker() {
        let none = Pubkey::default();
        assert_eq!(Role::resolve(&none, &key(1), &none, &none), Role::Public);
        assert!(Role::Worker.require_operator().is_err());
        assert!(Role::Worker.require_operator_or_worker().is_ok());
        assert!(Role::Public.require_operator_or_worker().is_err());
        assert!(Role::Operator.require_creditor().is_err());
    }
}
