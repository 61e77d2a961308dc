//! Weights for pallet-bond-token.
//!
//! Hand-tuned upper bounds until the benchmarks in `benchmarking.rs` are run
//! against reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};
use sp_std::marker::PhantomData;

/// Weight functions needed for pallet-bond-token.
pub trait WeightInfo {
    fn mint_tokens() -> Weight;
    fn buy_for_investor() -> Weight;
    fn batch_drop(n: u32) -> Weight;
    fn transfer() -> Weight;
    fn burn_tokens() -> Weight;
    fn freeze() -> Weight;
    fn unfreeze() -> Weight;
    fn approve() -> Weight;
    fn transfer_from() -> Weight;
}

/// Weights scaled by the runtime's own database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Reads: Roles, TotalSupply, Balances. Writes: TotalSupply, Balances.
    fn mint_tokens() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    fn buy_for_investor() -> Weight {
        Weight::from_parts(13_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    fn batch_drop(n: u32) -> Weight {
        Weight::from_parts(10_000_000, 3_500)
            .saturating_add(Weight::from_parts(4_000_000, 2_600).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().reads((1_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes(1_u64))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }
    // Reads: Frozen, Balances (x2). Writes: Balances (x2).
    fn transfer() -> Weight {
        Weight::from_parts(14_000_000, 6_000)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    fn burn_tokens() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    fn freeze() -> Weight {
        Weight::from_parts(8_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn unfreeze() -> Weight {
        Weight::from_parts(8_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(9_000_000, 3_600)
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    // Reads: Frozen, Allowances, Balances (x2). Writes: Allowances, Balances (x2).
    fn transfer_from() -> Weight {
        Weight::from_parts(18_000_000, 6_000)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn mint_tokens() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn buy_for_investor() -> Weight {
        Weight::from_parts(13_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn batch_drop(n: u32) -> Weight {
        Weight::from_parts(10_000_000, 3_500)
            .saturating_add(Weight::from_parts(4_000_000, 2_600).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().reads((1_u64).saturating_mul(n.into())))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
            .saturating_add(RocksDbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }
    fn transfer() -> Weight {
        Weight::from_parts(14_000_000, 6_000)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn burn_tokens() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn freeze() -> Weight {
        Weight::from_parts(8_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn unfreeze() -> Weight {
        Weight::from_parts(8_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(9_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(18_000_000, 6_000)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
}
