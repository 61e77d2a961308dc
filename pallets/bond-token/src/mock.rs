use crate as pallet_bond_token;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
    PalletId,
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        NativeBalances: pallet_balances,
        BondToken: pallet_bond_token,
    }
);

pub const OWNER: u64 = 1;
pub const CONTROLLER: u64 = 2;
pub const AIR_DROP_MANAGER: u64 = 3;
pub const NOT_MANAGER: u64 = 4;
pub const FIRST_INVESTOR: u64 = 5;
pub const SECOND_INVESTOR: u64 = 6;
pub const FIRST_AIR_DROP: u64 = 7;
pub const SECOND_AIR_DROP: u64 = 8;
pub const NOT_INVESTOR: u64 = 9;

/// Native funds every test account starts with.
pub const NATIVE_ENDOWMENT: u64 = 1_000_000;

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = pallet_bond_token::RejectInboundValue<Test, NativeTransfer>;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = pallet_balances::AccountData<u64>;
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
    type AccountStore = System;
}

/// Native-value transfers the runtime knows about.
pub struct NativeTransfer;
impl pallet_bond_token::InboundValue<RuntimeCall, u64> for NativeTransfer {
    fn recipient(call: &RuntimeCall) -> Option<u64> {
        match call {
            RuntimeCall::NativeBalances(
                pallet_balances::Call::transfer_allow_death { dest, .. }
                | pallet_balances::Call::transfer_keep_alive { dest, .. }
                | pallet_balances::Call::transfer_all { dest, .. },
            ) => Some(*dest),
            _ => None,
        }
    }
}

parameter_types! {
    pub const BondTokenPalletId: PalletId = PalletId(*b"py/bondt");
}

impl pallet_bond_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type PalletId = BondTokenPalletId;
    type MaxBatchSize = ConstU32<100>;
    type MaxPurchaseRefLen = ConstU32<64>;
    type WeightInfo = ();
}

/// Fresh ledger: roles assigned, no supply, transfers frozen.
pub fn new_test_ext() -> sp_io::TestExternalities {
    new_test_ext_with(vec![], false)
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext_with(
    initial_balances: Vec<(u64, u128)>,
    transfers_open: bool,
) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_balances::GenesisConfig::<Test> {
        balances: (OWNER..=NOT_INVESTOR).map(|who| (who, NATIVE_ENDOWMENT)).collect(),
        dev_accounts: None,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_bond_token::GenesisConfig::<Test> {
        owner: Some(OWNER),
        controller: Some(CONTROLLER),
        air_drop_manager: Some(AIR_DROP_MANAGER),
        token_name: b"Test Bond".to_vec(),
        token_symbol: b"TBND".to_vec(),
        decimals: 18,
        initial_balances,
        transfers_open,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are only recorded from block 1 onwards.
    ext.execute_with(|| System::set_block_number(1));
    ext
}
