#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are kept for the read-only query surface.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # Divvi Token Pallet
//!
//! A fungible token whose privileged operations are gated by roles.
//!
//! - Minting requires [`Role::Minter`].
//! - Role administration, the transfer gate and upgrade authorization require
//!   [`Role::DefaultAdmin`], which is held by at most one account.
//! - The default admin only changes hands through a two-step transfer that the
//!   new admin must accept after a configurable block delay.
//! - While [`PermitTransfersOnly`] is enabled (the default), only accounts in
//!   [`PermittedSenders`] may originate transfers.
//!
//! Every dispatchable performs all of its checks before the first storage write.

use frame_support::{dispatch::DispatchResult, pallet_prelude::*, traits::ConstBool};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use ledger::UNLIMITED_ALLOWANCE;
pub use pallet::*;
pub use types::{PendingAdminTransfer, PendingDelayChange, Role};
pub use upgrade::EnsureDefaultAdmin;
pub use weights::WeightInfo;

mod gate;
mod ledger;
mod roles;
pub mod types;
mod upgrade;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub(crate) const LOG_TARGET: &str = "runtime::divvi-token";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Divvi")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "DIVVI")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Always equals the sum of [`Balances`].
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Amount `spender` may move out of `owner`'s balance, keyed `(owner, spender)`.
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

    /// Holders of every role except [`Role::DefaultAdmin`], which lives in [`DefaultAdmin`].
    #[pallet::storage]
    pub type RoleMembers<T: Config> =
        StorageDoubleMap<_, Twox64Concat, Role, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// The single holder of [`Role::DefaultAdmin`], if any.
    #[pallet::storage]
    #[pallet::getter(fn default_admin)]
    pub type DefaultAdmin<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Delay in blocks between beginning and accepting an admin transfer.
    /// Superseded by [`PendingDefaultAdminDelay`] once its schedule is reached.
    #[pallet::storage]
    pub type DefaultAdminDelay<T: Config> = StorageValue<_, BlockNumberFor<T>, ValueQuery>;

    #[pallet::storage]
    pub type PendingDefaultAdmin<T: Config> =
        StorageValue<_, PendingAdminTransfer<T::AccountId, BlockNumberFor<T>>, OptionQuery>;

    #[pallet::storage]
    pub type PendingDefaultAdminDelay<T: Config> =
        StorageValue<_, PendingDelayChange<BlockNumberFor<T>>, OptionQuery>;

    /// When set, only [`PermittedSenders`] may originate transfers.
    #[pallet::storage]
    #[pallet::getter(fn permit_transfers_only)]
    pub type PermitTransfersOnly<T> = StorageValue<_, bool, ValueQuery, ConstBool<true>>;

    /// Accounts allowed to send while [`PermitTransfersOnly`] is set.
    /// Kept intact when the gate is switched off.
    #[pallet::storage]
    #[pallet::getter(fn is_permitted_sender)]
    pub type PermittedSenders<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Code hash most recently approved by the default admin for replacement.
    #[pallet::storage]
    #[pallet::getter(fn authorized_upgrade)]
    pub type AuthorizedUpgrade<T: Config> = StorageValue<_, T::Hash, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// New tokens minted
        Minted { to: T::AccountId, amount: u128 },
        /// `owner` set the allowance of `spender`
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// `account` was granted `role` by `sender`
        RoleGranted { role: Role, account: T::AccountId, sender: T::AccountId },
        /// `account` lost `role`; `sender` is the revoking admin or the account itself
        RoleRevoked { role: Role, account: T::AccountId, sender: T::AccountId },
        /// An admin transfer to `new_admin` may be accepted from `accept_schedule`
        DefaultAdminTransferScheduled { new_admin: T::AccountId, accept_schedule: BlockNumberFor<T> },
        /// A pending admin transfer was dropped before acceptance
        DefaultAdminTransferCanceled,
        /// `new_delay` replaces the admin delay at `effect_schedule`
        DefaultAdminDelayChangeScheduled {
            new_delay: BlockNumberFor<T>,
            effect_schedule: BlockNumberFor<T>,
        },
        /// A pending delay change was dropped before it took effect
        DefaultAdminDelayChangeCanceled,
        /// Allow-list membership of `account` changed
        PermittedSenderSet { account: T::AccountId, allowed: bool },
        /// The global transfer gate was toggled
        PermitTransfersOnlySet { enabled: bool },
        /// The default admin approved a code replacement
        UpgradeAuthorized { code_hash: T::Hash },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller lacks the role the call requires.
        Unauthorized,
        /// The sending account may not originate transfers while the gate is on.
        TransferDenied,
        InsufficientBalance,
        InsufficientAllowance,
        /// The admin transfer schedule has not been reached yet.
        DelayNotElapsed,
        /// No admin transfer is pending.
        InvalidState,
        /// The default admin role can only move through the delayed transfer.
        EnforcedDefaultAdminRules,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::Minter, &who)?;
            Self::do_mint(&to, amount)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_can_transfer(&sender)?;
            Self::do_transfer(&sender, &to, amount)
        }

        /// Move `amount` out of `from` using the allowance `from` granted to the caller.
        /// The gate is evaluated against `from`, not the caller.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_can_transfer(&from)?;
            Self::do_transfer_from(&spender, &from, &to, amount)
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::do_approve(&owner, &spender, amount);
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::grant_role())]
        pub fn grant_role(origin: OriginFor<T>, role: Role, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(role.admin_role(), &who)?;
            Self::do_grant_role(role, &account, &who)
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::revoke_role())]
        pub fn revoke_role(
            origin: OriginFor<T>,
            role: Role,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(role.admin_role(), &who)?;
            ensure!(role != Role::DefaultAdmin, Error::<T>::EnforcedDefaultAdminRules);
            Self::do_revoke_role(role, &account, &who);
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::renounce_role())]
        pub fn renounce_role(origin: OriginFor<T>, role: Role) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(role != Role::DefaultAdmin, Error::<T>::EnforcedDefaultAdminRules);
            Self::do_revoke_role(role, &who, &who);
            Ok(())
        }

        /// Schedule `new_delay` to replace the admin delay once the current delay
        /// has elapsed from now.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::change_default_admin_delay())]
        pub fn change_default_admin_delay(
            origin: OriginFor<T>,
            new_delay: BlockNumberFor<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::DefaultAdmin, &who)?;
            Self::do_change_default_admin_delay(new_delay);
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::begin_default_admin_transfer())]
        pub fn begin_default_admin_transfer(
            origin: OriginFor<T>,
            new_admin: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::DefaultAdmin, &who)?;
            Self::do_begin_default_admin_transfer(new_admin);
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::accept_default_admin_transfer())]
        pub fn accept_default_admin_transfer(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_accept_default_admin_transfer(who)
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::cancel_default_admin_transfer())]
        pub fn cancel_default_admin_transfer(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::DefaultAdmin, &who)?;
            Self::do_cancel_default_admin_transfer();
            Ok(())
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::rollback_default_admin_delay())]
        pub fn rollback_default_admin_delay(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::DefaultAdmin, &who)?;
            Self::do_rollback_default_admin_delay();
            Ok(())
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::set_permitted_sender())]
        pub fn set_permitted_sender(
            origin: OriginFor<T>,
            account: T::AccountId,
            allowed: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::DefaultAdmin, &who)?;
            Self::do_set_permitted_sender(account, allowed);
            Ok(())
        }

        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::set_permit_transfers_only())]
        pub fn set_permit_transfers_only(origin: OriginFor<T>, enabled: bool) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::DefaultAdmin, &who)?;
            Self::do_set_permit_transfers_only(enabled);
            Ok(())
        }

        /// Record `code_hash` as approved for replacement. Applying it is up to the host.
        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::authorize_upgrade())]
        pub fn authorize_upgrade(origin: OriginFor<T>, code_hash: T::Hash) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_upgrade_authorized(&who)?;
            Self::do_authorize_upgrade(code_hash);
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial holder of the default admin role. Required; build panics without one.
        pub admin: Option<T::AccountId>,
        /// Blocks a new admin must wait before accepting a transfer
        pub admin_transfer_delay: BlockNumberFor<T>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Accounts granted the minter role at genesis
        pub minters: Vec<T::AccountId>,
        /// Accounts allowed to send while the transfer gate is on
        pub permitted_senders: Vec<T::AccountId>,
        /// Initial token mints (account, amount)
        pub initial_balances: Vec<(T::AccountId, u128)>,
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

            let admin = self.admin.as_ref().expect("Genesis must name a default admin");
            DefaultAdmin::<T>::put(admin);
            DefaultAdminDelay::<T>::put(self.admin_transfer_delay);

            for minter in &self.minters {
                RoleMembers::<T>::insert(Role::Minter, minter, true);
            }

            for account in &self.permitted_senders {
                PermittedSenders::<T>::insert(account, true);
            }

            // Repeated accounts accumulate so the supply matches the balances.
            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                Balances::<T>::mutate(account, |bal| {
                    *bal = bal.checked_add(*amount).expect("Initial balance overflow")
                });
                total = total.checked_add(*amount).expect("Initial total supply overflow");
            }
            TotalSupply::<T>::put(total);
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Check the pallet's storage invariants.
    ///
    /// - [`TotalSupply`] equals the sum of all [`Balances`].
    /// - [`RoleMembers`] never records [`Role::DefaultAdmin`].
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let summed = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, bal| acc.checked_add(bal))
            .ok_or("balance sum overflows")?;
        ensure!(summed == TotalSupply::<T>::get(), "total supply does not match balances");
        ensure!(
            RoleMembers::<T>::iter_prefix(Role::DefaultAdmin).next().is_none(),
            "default admin stored as a role member"
        );
        Ok(())
    }
}
