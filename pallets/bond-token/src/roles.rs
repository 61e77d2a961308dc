//! Privileged identities of the bond ledger.

use frame_support::pallet_prelude::*;

/// A privileged identity allowed to call a subset of the ledger's operations.
#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum Role {
    /// Mints, burns and toggles the transfer freeze.
    Owner,
    /// Issues units on behalf of investors who bought off-ledger.
    Controller,
    /// Distributes batch airdrops.
    AirDropManager,
}

/// The three role holders, written once at genesis.
#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct RoleAssignment<AccountId> {
    pub owner: AccountId,
    pub controller: AccountId,
    pub air_drop_manager: AccountId,
}

impl<AccountId: PartialEq> RoleAssignment<AccountId> {
    pub fn holder(&self, role: Role) -> &AccountId {
        match role {
            Role::Owner => &self.owner,
            Role::Controller => &self.controller,
            Role::AirDropManager => &self.air_drop_manager,
        }
    }

    pub fn has_role(&self, who: &AccountId, role: Role) -> bool {
        self.holder(role) == who
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holder_matches_each_role() {
        let roles = RoleAssignment { owner: 1u64, controller: 2, air_drop_manager: 3 };

        assert!(roles.has_role(&1, Role::Owner));
        assert!(roles.has_role(&2, Role::Controller));
        assert!(roles.has_role(&3, Role::AirDropManager));

        assert!(!roles.has_role(&1, Role::Controller));
        assert!(!roles.has_role(&2, Role::AirDropManager));
        assert!(!roles.has_role(&3, Role::Owner));
    }

    #[test]
    fn one_account_may_hold_several_roles() {
        let roles = RoleAssignment { owner: 7u64, controller: 7, air_drop_manager: 8 };

        assert!(roles.has_role(&7, Role::Owner));
        assert!(roles.has_role(&7, Role::Controller));
        assert!(!roles.has_role(&7, Role::AirDropManager));
    }
}
