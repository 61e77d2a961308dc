//! # Bond Token Pallet
//!
//! A role-gated fungible ledger recording ownership of a tokenized bond.
//!
//! Three roles are fixed at genesis:
//!
//! - **Owner** mints, burns and toggles the global transfer freeze.
//! - **Controller** issues units to investors who paid off-ledger
//!   ([`Pallet::buy_for_investor`]), attaching an opaque purchase reference.
//! - **AirDropManager** credits many accounts in one all-or-nothing
//!   [`Pallet::batch_drop`].
//!
//! Holders move units with [`Pallet::transfer`] or, through an allowance,
//! [`Pallet::transfer_from`]. Both fail with [`Error::TransfersFrozen`] while the
//! ledger is frozen, which is the state it starts in. Issuance is never gated by
//! the freeze flag.
//!
//! Every dispatchable validates before it writes, so a rejected call leaves
//! balances, supply, allowances, the freeze flag and the event log untouched.
//! The sum of all balances always equals [`TotalSupply`].
//!
//! Native value sent directly to [`Pallet::account_id`] is refused by the
//! [`RejectInboundValue`] call filter.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, PalletId};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::AccountIdConversion;
use sp_std::{collections::btree_map::BTreeMap, prelude::*};

pub use inbound::{InboundValue, RejectInboundValue};
pub use pallet::*;
pub use roles::{Role, RoleAssignment};
pub use weights::WeightInfo;

mod inbound;
mod roles;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub(crate) const LOG_TARGET: &str = "pallet-bond-token";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// Opaque purchase reference attached to a controller purchase.
pub type PurchaseRefOf<T> = BoundedVec<u8, <T as Config>::MaxPurchaseRefLen>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Identifier the ledger's own account is derived from.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Maximum number of recipients in one `batch_drop`.
        #[pallet::constant]
        type MaxBatchSize: Get<u32>;

        /// Maximum length in bytes of a purchase reference.
        #[pallet::constant]
        type MaxPurchaseRefLen: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Sovereign Bond 2030")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "SB30")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Owner, Controller and AirDropManager. Unset means no privileged call can succeed.
    #[pallet::storage]
    #[pallet::getter(fn roles)]
    pub type Roles<T: Config> = StorageValue<_, RoleAssignment<T::AccountId>, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances. Absent and zero are the same state.
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Amount `spender` may still move out of `owner`'s balance.
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    #[pallet::type_value]
    pub fn FrozenByDefault() -> bool {
        true
    }

    /// Global transfer freeze. A fresh ledger is frozen.
    #[pallet::storage]
    #[pallet::getter(fn is_frozen)]
    pub type Frozen<T> = StorageValue<_, bool, ValueQuery, FrozenByDefault>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Owner created new units
        Minted { owner: T::AccountId, to: T::AccountId, amount: u128 },
        /// Controller issued units for an off-ledger purchase
        Purchased {
            controller: T::AccountId,
            investor: T::AccountId,
            amount: u128,
            purchase_ref: PurchaseRefOf<T>,
        },
        /// One entry of a batch airdrop
        AirDropped { manager: T::AccountId, to: T::AccountId, amount: u128 },
        /// A batch airdrop was committed
        BatchDropCompleted { manager: T::AccountId, recipients: u32, total: u128 },
        /// Units moved between holders
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Owner destroyed units
        Burned { owner: T::AccountId, from: T::AccountId, amount: u128 },
        /// Allowance set
        Approved { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Holder transfers suspended
        TransfersFrozen { owner: T::AccountId },
        /// Holder transfers resumed
        TransfersUnfrozen { owner: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the Owner.
        NotOwner,
        /// Caller is not the Controller.
        NotController,
        /// Caller is not the AirDropManager.
        NotAirDropManager,
        /// Transfers are frozen.
        TransfersFrozen,
        /// Debit exceeds the account's balance.
        InsufficientBalance,
        /// Amount exceeds the spender's allowance.
        InsufficientAllowance,
        /// `accounts` and `amounts` differ in length.
        LengthMismatch,
        /// More recipients than `MaxBatchSize`.
        BatchTooLarge,
        /// Purchase reference longer than `MaxPurchaseRefLen`.
        PurchaseRefTooLong,
        /// Balance or total supply would overflow.
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(T::MaxBatchSize::get() > 0, "MaxBatchSize must be non-zero");
        }

        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create `amount` new units in `to`'s balance. Owner only.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::mint_tokens())]
        pub fn mint_tokens(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let owner = Self::ensure_role(origin, Role::Owner)?;
            Self::credit(&to, amount)?;
            Self::deposit_event(Event::Minted { owner, to, amount });
            Ok(())
        }

        /// Issue units to an investor who paid off-ledger. Controller only.
        ///
        /// `purchase_ref` is carried into the event untouched.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::buy_for_investor())]
        pub fn buy_for_investor(
            origin: OriginFor<T>,
            investor: T::AccountId,
            amount: u128,
            purchase_ref: Vec<u8>,
        ) -> DispatchResult {
            let controller = Self::ensure_role(origin, Role::Controller)?;
            let purchase_ref: PurchaseRefOf<T> =
                purchase_ref.try_into().map_err(|_| Error::<T>::PurchaseRefTooLong)?;

            Self::credit(&investor, amount)?;
            Self::deposit_event(Event::Purchased { controller, investor, amount, purchase_ref });
            Ok(())
        }

        /// Credit `amounts[i]` to `accounts[i]` for every `i`. AirDropManager only.
        ///
        /// Either every entry is credited or none is.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::batch_drop(accounts.len() as u32))]
        pub fn batch_drop(
            origin: OriginFor<T>,
            accounts: Vec<T::AccountId>,
            amounts: Vec<u128>,
        ) -> DispatchResult {
            let manager = Self::ensure_role(origin, Role::AirDropManager)?;
            ensure!(accounts.len() == amounts.len(), Error::<T>::LengthMismatch);
            ensure!(accounts.len() <= T::MaxBatchSize::get() as usize, Error::<T>::BatchTooLarge);

            // Stage every new balance first; nothing is written until the batch is known good.
            let mut staged: BTreeMap<T::AccountId, u128> = BTreeMap::new();
            let mut total: u128 = 0;
            for (account, amount) in accounts.iter().zip(amounts.iter()) {
                let current = match staged.get(account) {
                    Some(balance) => *balance,
                    None => Balances::<T>::get(account),
                };
                let updated = current.checked_add(*amount).ok_or(Error::<T>::Overflow)?;
                staged.insert(account.clone(), updated);
                total = total.checked_add(*amount).ok_or(Error::<T>::Overflow)?;
            }
            let supply = TotalSupply::<T>::get().checked_add(total).ok_or(Error::<T>::Overflow)?;

            for (account, balance) in staged {
                Balances::<T>::insert(account, balance);
            }
            TotalSupply::<T>::put(supply);

            let recipients = accounts.len() as u32;
            for (to, amount) in accounts.into_iter().zip(amounts) {
                Self::deposit_event(Event::AirDropped { manager: manager.clone(), to, amount });
            }
            log::info!(
                target: LOG_TARGET,
                "batch drop of {total} units to {recipients} recipients committed"
            );
            Self::deposit_event(Event::BatchDropCompleted { manager, recipients, total });
            Ok(())
        }

        /// Move `amount` from the caller to `to`. Fails while transfers are frozen.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let from = ensure_signed(origin)?;
            ensure!(!Frozen::<T>::get(), Error::<T>::TransfersFrozen);

            Self::move_balance(&from, &to, amount)?;
            Self::deposit_event(Event::Transferred { from, to, amount });
            Ok(())
        }

        /// Destroy `amount` units held by `from`. Owner only.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::burn_tokens())]
        pub fn burn_tokens(origin: OriginFor<T>, from: T::AccountId, amount: u128) -> DispatchResult {
            let owner = Self::ensure_role(origin, Role::Owner)?;
            Self::burn(&from, amount)?;
            Self::deposit_event(Event::Burned { owner, from, amount });
            Ok(())
        }

        /// Suspend holder transfers. Owner only; freezing a frozen ledger is a no-op.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::freeze())]
        pub fn freeze(origin: OriginFor<T>) -> DispatchResult {
            let owner = Self::ensure_role(origin, Role::Owner)?;
            if !Frozen::<T>::get() {
                Frozen::<T>::put(true);
                log::info!(target: LOG_TARGET, "transfers frozen");
                Self::deposit_event(Event::TransfersFrozen { owner });
            }
            Ok(())
        }

        /// Resume holder transfers. Owner only; unfreezing an open ledger is a no-op.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::unfreeze())]
        pub fn unfreeze(origin: OriginFor<T>) -> DispatchResult {
            let owner = Self::ensure_role(origin, Role::Owner)?;
            if Frozen::<T>::get() {
                Frozen::<T>::put(false);
                log::info!(target: LOG_TARGET, "transfers unfrozen");
                Self::deposit_event(Event::TransfersUnfrozen { owner });
            }
            Ok(())
        }

        /// Let `spender` move up to `amount` of the caller's units, replacing any
        /// previous allowance.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approved { owner, spender, amount });
            Ok(())
        }

        /// Move `amount` from `from` to `to` out of the caller's allowance.
        /// Fails while transfers are frozen.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            ensure!(!Frozen::<T>::get(), Error::<T>::TransfersFrozen);

            let remaining = Allowances::<T>::get(&from, &spender)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientAllowance)?;
            Self::move_balance(&from, &to, amount)?;
            Allowances::<T>::insert(&from, &spender, remaining);

            Self::deposit_event(Event::Transferred { from, to, amount });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Owner role holder
        pub owner: Option<T::AccountId>,
        /// Controller role holder
        pub controller: Option<T::AccountId>,
        /// AirDropManager role holder
        pub air_drop_manager: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Initial token mints (account, amount)
        pub initial_balances: Vec<(T::AccountId, u128)>,
        /// Start with transfers open instead of frozen
        pub transfers_open: bool,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            match (&self.owner, &self.controller, &self.air_drop_manager) {
                (Some(owner), Some(controller), Some(air_drop_manager)) => {
                    Roles::<T>::put(RoleAssignment {
                        owner: owner.clone(),
                        controller: controller.clone(),
                        air_drop_manager: air_drop_manager.clone(),
                    });
                }
                (None, None, None) => {}
                _ => panic!("owner, controller and air_drop_manager must be configured together"),
            }

            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                Balances::<T>::mutate(account, |balance| {
                    *balance = balance.checked_add(*amount).expect("Genesis balance overflow")
                });
                total = total.checked_add(*amount).expect("Genesis total supply overflow");
            }
            TotalSupply::<T>::put(total);

            if self.transfers_open {
                Frozen::<T>::put(false);
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// The ledger's own account. It never holds native value.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    pub fn has_role(who: &T::AccountId, role: Role) -> bool {
        Roles::<T>::get().is_some_and(|roles| roles.has_role(who, role))
    }

    /// Signed origin holding `role`, or the role's authorization error.
    fn ensure_role(origin: OriginFor<T>, role: Role) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Self::has_role(&who, role), Self::unauthorized(role));
        Ok(who)
    }

    fn unauthorized(role: Role) -> Error<T> {
        match role {
            Role::Owner => Error::<T>::NotOwner,
            Role::Controller => Error::<T>::NotController,
            Role::AirDropManager => Error::<T>::NotAirDropManager,
        }
    }

    /// Add `amount` to `to` and to the total supply.
    fn credit(to: &T::AccountId, amount: u128) -> DispatchResult {
        let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
        let balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        Balances::<T>::insert(to, balance);
        TotalSupply::<T>::put(supply);
        log::debug!(target: LOG_TARGET, "credited {amount} units, supply now {supply}");
        Ok(())
    }

    /// Remove `amount` from `from` and from the total supply.
    fn burn(from: &T::AccountId, amount: u128) -> DispatchResult {
        let balance =
            Balances::<T>::get(from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        // Cannot underflow while the supply invariant holds.
        let supply = TotalSupply::<T>::get().checked_sub(amount).ok_or(Error::<T>::Overflow)?;

        Balances::<T>::insert(from, balance);
        TotalSupply::<T>::put(supply);
        log::debug!(target: LOG_TARGET, "burned {amount} units, supply now {supply}");
        Ok(())
    }

    /// Debit `from` and credit `to` by the same amount; total supply is untouched.
    fn move_balance(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        let from_balance =
            Balances::<T>::get(from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        if from == to {
            return Ok(());
        }
        let to_balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        Balances::<T>::insert(from, from_balance);
        Balances::<T>::insert(to, to_balance);
        log::debug!(target: LOG_TARGET, "moved {amount} units");
        Ok(())
    }

    /// Checks that the balances add up to the total supply.
    #[cfg(any(feature = "try-runtime", test))]
    pub(crate) fn do_try_state() -> Result<(), DispatchError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or(DispatchError::Other("sum of balances overflows u128"))?;
        ensure!(
            sum == TotalSupply::<T>::get(),
            DispatchError::Other("total supply differs from the sum of balances")
        );
        Ok(())
    }
}
