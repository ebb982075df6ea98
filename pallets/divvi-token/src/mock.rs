use crate as pallet_divvi_token;
use frame_support::{
    derive_impl,
    traits::{ConstU32, ConstU64},
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
        DivviToken: pallet_divvi_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
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
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_divvi_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

/// Genesis default admin.
pub const ADMIN: u64 = 1;
/// Holds the minter role from genesis.
pub const MINTER: u64 = 2;
/// On the sender allow-list, funded at genesis.
pub const ALICE: u64 = 3;
/// Funded at genesis but not allow-listed.
pub const BOB: u64 = 4;
/// No balance and no roles.
pub const CHARLIE: u64 = 5;

/// Blocks between beginning and accepting an admin transfer at genesis.
pub const ADMIN_DELAY: u64 = 10;

pub const ALICE_BALANCE: u128 = 1_000_000;
pub const BOB_BALANCE: u128 = 500_000;

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_divvi_token::GenesisConfig::<Test> {
        admin: Some(ADMIN),
        admin_transfer_delay: ADMIN_DELAY,
        token_name: b"Divvi".to_vec(),
        token_symbol: b"DIVVI".to_vec(),
        decimals: 18,
        minters: vec![MINTER],
        permitted_senders: vec![ALICE],
        initial_balances: vec![(ALICE, ALICE_BALANCE), (BOB, BOB_BALANCE)],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Jump the chain to block `n`.
pub fn run_to_block(n: u64) {
    System::set_block_number(n);
}
