//! Benchmarking setup for pallet-divvi-token

use super::*;

#[allow(unused)]
use crate::Pallet as DivviToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

/// Install `who` as the default admin.
fn set_admin<T: Config>(who: &T::AccountId) {
    DefaultAdmin::<T>::put(who);
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn mint() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;
        RoleMembers::<T>::insert(Role::Minter, &caller, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        PermittedSenders::<T>::insert(&caller, true);
        Balances::<T>::insert(&caller, 10_000_000);
        TotalSupply::<T>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn transfer_from() {
        let spender: T::AccountId = whitelisted_caller();
        let owner: T::AccountId = account("owner", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        PermittedSenders::<T>::insert(&owner, true);
        Balances::<T>::insert(&owner, 10_000_000);
        TotalSupply::<T>::put(10_000_000);
        Allowances::<T>::insert(&owner, &spender, 5_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert_eq!(Allowances::<T>::get(&owner, &spender), 4_000_000);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 500);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 500);
    }

    #[benchmark]
    fn grant_role() {
        let admin: T::AccountId = whitelisted_caller();
        let account: T::AccountId = account("minter", 0, 0);
        set_admin::<T>(&admin);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), Role::Minter, account.clone());

        assert!(Pallet::<T>::has_role(Role::Minter, &account));
    }

    #[benchmark]
    fn revoke_role() {
        let admin: T::AccountId = whitelisted_caller();
        let account: T::AccountId = account("minter", 0, 0);
        set_admin::<T>(&admin);
        RoleMembers::<T>::insert(Role::Minter, &account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), Role::Minter, account.clone());

        assert!(!Pallet::<T>::has_role(Role::Minter, &account));
    }

    #[benchmark]
    fn renounce_role() {
        let caller: T::AccountId = whitelisted_caller();
        RoleMembers::<T>::insert(Role::Minter, &caller, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), Role::Minter);

        assert!(!Pallet::<T>::has_role(Role::Minter, &caller));
    }

    #[benchmark]
    fn change_default_admin_delay() {
        let admin: T::AccountId = whitelisted_caller();
        set_admin::<T>(&admin);
        // Worst case: an existing pending change gets replaced
        PendingDefaultAdminDelay::<T>::put(PendingDelayChange {
            new_delay: 5u32.into(),
            effect_schedule: 1_000u32.into(),
        });

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), 100u32.into());

        assert!(PendingDefaultAdminDelay::<T>::get().is_some());
    }

    #[benchmark]
    fn begin_default_admin_transfer() {
        let admin: T::AccountId = whitelisted_caller();
        let new_admin: T::AccountId = account("new_admin", 0, 0);
        set_admin::<T>(&admin);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), new_admin.clone());

        assert_eq!(Pallet::<T>::pending_default_admin().map(|(who, _)| who), Some(new_admin));
    }

    #[benchmark]
    fn accept_default_admin_transfer() {
        let admin: T::AccountId = account("admin", 0, 0);
        let new_admin: T::AccountId = whitelisted_caller();
        set_admin::<T>(&admin);
        PendingDefaultAdmin::<T>::put(PendingAdminTransfer {
            new_admin: new_admin.clone(),
            schedule: frame_system::Pallet::<T>::block_number(),
        });

        #[extrinsic_call]
        _(RawOrigin::Signed(new_admin.clone()));

        assert_eq!(DefaultAdmin::<T>::get(), Some(new_admin));
    }

    #[benchmark]
    fn cancel_default_admin_transfer() {
        let admin: T::AccountId = whitelisted_caller();
        let new_admin: T::AccountId = account("new_admin", 0, 0);
        set_admin::<T>(&admin);
        PendingDefaultAdmin::<T>::put(PendingAdminTransfer { new_admin, schedule: 1_000u32.into() });
        PendingDefaultAdminDelay::<T>::put(PendingDelayChange {
            new_delay: 5u32.into(),
            effect_schedule: 1_000u32.into(),
        });

        #[extrinsic_call]
        _(RawOrigin::Signed(admin));

        assert!(PendingDefaultAdmin::<T>::get().is_none());
        assert!(PendingDefaultAdminDelay::<T>::get().is_none());
    }

    #[benchmark]
    fn rollback_default_admin_delay() {
        let admin: T::AccountId = whitelisted_caller();
        set_admin::<T>(&admin);
        PendingDefaultAdminDelay::<T>::put(PendingDelayChange {
            new_delay: 5u32.into(),
            effect_schedule: 1_000u32.into(),
        });

        #[extrinsic_call]
        _(RawOrigin::Signed(admin));

        assert!(PendingDefaultAdminDelay::<T>::get().is_none());
    }

    #[benchmark]
    fn set_permitted_sender() {
        let admin: T::AccountId = whitelisted_caller();
        let account: T::AccountId = account("sender", 0, 0);
        set_admin::<T>(&admin);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), account.clone(), true);

        assert_eq!(PermittedSenders::<T>::get(&account), true);
    }

    #[benchmark]
    fn set_permit_transfers_only() {
        let admin: T::AccountId = whitelisted_caller();
        set_admin::<T>(&admin);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), false);

        assert_eq!(PermitTransfersOnly::<T>::get(), false);
    }

    #[benchmark]
    fn authorize_upgrade() {
        let admin: T::AccountId = whitelisted_caller();
        set_admin::<T>(&admin);
        let code_hash = T::Hash::default();

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), code_hash);

        assert_eq!(AuthorizedUpgrade::<T>::get(), Some(code_hash));
    }

    impl_benchmark_test_suite!(DivviToken, crate::mock::new_test_ext(), crate::mock::Test);
}
