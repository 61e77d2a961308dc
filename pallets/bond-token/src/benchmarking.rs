//! Benchmarking setup for pallet-bond-token

use super::*;

#[allow(unused)]
use crate::Pallet as BondToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use sp_std::vec;

/// Make `who` the holder of every role.
fn assign_roles<T: Config>(who: &T::AccountId) {
    Roles::<T>::put(RoleAssignment {
        owner: who.clone(),
        controller: who.clone(),
        air_drop_manager: who.clone(),
    });
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn mint_tokens() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;
        assign_roles::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn buy_for_investor() {
        let caller: T::AccountId = whitelisted_caller();
        let investor: T::AccountId = account("investor", 0, 0);
        let amount: u128 = 1_000_000;
        let purchase_ref = vec![0xab; T::MaxPurchaseRefLen::get() as usize];
        assign_roles::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), investor.clone(), amount, purchase_ref);

        assert_eq!(Balances::<T>::get(&investor), amount);
    }

    #[benchmark]
    fn batch_drop(n: Linear<1, 100>) {
        let n = n.min(T::MaxBatchSize::get());
        let caller: T::AccountId = whitelisted_caller();
        let accounts: Vec<T::AccountId> = (0..n).map(|i| account("recipient", i, 0)).collect();
        let amounts = vec![1_000u128; n as usize];
        assign_roles::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), accounts, amounts);

        assert_eq!(TotalSupply::<T>::get(), 1_000u128 * n as u128);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        // Setup: open transfers and fund the caller
        Frozen::<T>::put(false);
        Balances::<T>::insert(&caller, 10_000_000);
        TotalSupply::<T>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn burn_tokens() {
        let caller: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, 0);
        assign_roles::<T>(&caller);
        Balances::<T>::insert(&holder, 10_000_000);
        TotalSupply::<T>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), holder.clone(), 10_000_000);

        assert_eq!(Balances::<T>::get(&holder), 0);
        assert_eq!(TotalSupply::<T>::get(), 0);
    }

    #[benchmark]
    fn freeze() {
        let caller: T::AccountId = whitelisted_caller();
        assign_roles::<T>(&caller);
        Frozen::<T>::put(false);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(Frozen::<T>::get());
    }

    #[benchmark]
    fn unfreeze() {
        let caller: T::AccountId = whitelisted_caller();
        assign_roles::<T>(&caller);
        Frozen::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(!Frozen::<T>::get());
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000);
    }

    #[benchmark]
    fn transfer_from() {
        let caller: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);

        Frozen::<T>::put(false);
        Balances::<T>::insert(&holder, 10_000_000);
        TotalSupply::<T>::put(10_000_000);
        Allowances::<T>::insert(&holder, &caller, 1_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), holder.clone(), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
        assert_eq!(Allowances::<T>::get(&holder, &caller), 0);
    }

    impl_benchmark_test_suite!(BondToken, crate::mock::new_test_ext(), crate::mock::Test);
}
