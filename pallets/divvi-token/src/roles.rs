//! Role registry and the delayed default-admin transfer.
//!
//! The default admin is kept apart from the other roles in [`DefaultAdmin`] so
//! that at most one account can ever hold it. It changes hands in two steps:
//! the current admin schedules a transfer, and the new admin accepts it once the
//! admin delay has passed. A new delay takes effect only once the current delay
//! has elapsed from the block it was requested in.

use frame_support::{dispatch::DispatchResult, ensure};
use frame_system::pallet_prelude::BlockNumberFor;
use sp_runtime::traits::Saturating;

use crate::{
    Config, DefaultAdmin, DefaultAdminDelay, Error, Event, Pallet, PendingAdminTransfer,
    PendingDefaultAdmin, PendingDefaultAdminDelay, PendingDelayChange, Role, RoleMembers,
    LOG_TARGET,
};

impl<T: Config> Pallet<T> {
    pub fn has_role(role: Role, who: &T::AccountId) -> bool {
        match role {
            Role::DefaultAdmin => DefaultAdmin::<T>::get().as_ref() == Some(who),
            other => RoleMembers::<T>::get(other, who),
        }
    }

    pub(crate) fn ensure_role(role: Role, who: &T::AccountId) -> DispatchResult {
        ensure!(Self::has_role(role, who), Error::<T>::Unauthorized);
        Ok(())
    }

    pub(crate) fn do_grant_role(
        role: Role,
        account: &T::AccountId,
        sender: &T::AccountId,
    ) -> DispatchResult {
        ensure!(role != Role::DefaultAdmin, Error::<T>::EnforcedDefaultAdminRules);
        if Self::has_role(role, account) {
            return Ok(());
        }
        RoleMembers::<T>::insert(role, account, true);
        Self::deposit_event(Event::RoleGranted {
            role,
            account: account.clone(),
            sender: sender.clone(),
        });
        Ok(())
    }

    /// Remove `role` from `account`. A no-op if the role is not held.
    ///
    /// Only an accepted admin transfer removes [`Role::DefaultAdmin`].
    pub(crate) fn do_revoke_role(role: Role, account: &T::AccountId, sender: &T::AccountId) {
        if !Self::has_role(role, account) {
            return;
        }
        match role {
            Role::DefaultAdmin => {
                DefaultAdmin::<T>::kill();
                log::info!(target: LOG_TARGET, "default admin {:?} revoked by {:?}", account, sender);
            }
            other => RoleMembers::<T>::remove(other, account),
        }
        Self::deposit_event(Event::RoleRevoked {
            role,
            account: account.clone(),
            sender: sender.clone(),
        });
    }

    /// The admin delay in force at the current block.
    pub fn default_admin_delay() -> BlockNumberFor<T> {
        let now = frame_system::Pallet::<T>::block_number();
        match PendingDefaultAdminDelay::<T>::get() {
            Some(pending) if pending.effect_schedule <= now => pending.new_delay,
            _ => DefaultAdminDelay::<T>::get(),
        }
    }

    /// The scheduled delay change and the block it takes effect, while it is
    /// still in the future.
    pub fn pending_default_admin_delay() -> Option<(BlockNumberFor<T>, BlockNumberFor<T>)> {
        let now = frame_system::Pallet::<T>::block_number();
        PendingDefaultAdminDelay::<T>::get()
            .filter(|pending| pending.effect_schedule > now)
            .map(|pending| (pending.new_delay, pending.effect_schedule))
    }

    /// The account a transfer is pending to and the first block it may accept.
    pub fn pending_default_admin() -> Option<(T::AccountId, BlockNumberFor<T>)> {
        PendingDefaultAdmin::<T>::get().map(|pending| (pending.new_admin, pending.schedule))
    }

    /// Commit a pending delay change whose schedule has been reached.
    fn settle_pending_delay() {
        let now = frame_system::Pallet::<T>::block_number();
        if let Some(pending) = PendingDefaultAdminDelay::<T>::get() {
            if pending.effect_schedule <= now {
                DefaultAdminDelay::<T>::put(pending.new_delay);
                PendingDefaultAdminDelay::<T>::kill();
            }
        }
    }

    pub(crate) fn do_change_default_admin_delay(new_delay: BlockNumberFor<T>) {
        Self::settle_pending_delay();
        if let Some((dropped, _)) = Self::pending_default_admin_delay() {
            log::debug!(target: LOG_TARGET, "replacing pending admin delay {:?}", dropped);
            Self::deposit_event(Event::DefaultAdminDelayChangeCanceled);
        }

        let now = frame_system::Pallet::<T>::block_number();
        let effect_schedule = now.saturating_add(DefaultAdminDelay::<T>::get());
        PendingDefaultAdminDelay::<T>::put(PendingDelayChange { new_delay, effect_schedule });

        log::info!(
            target: LOG_TARGET,
            "admin delay change to {:?} scheduled for block {:?}",
            new_delay,
            effect_schedule
        );
        Self::deposit_event(Event::DefaultAdminDelayChangeScheduled { new_delay, effect_schedule });
    }

    pub(crate) fn do_rollback_default_admin_delay() {
        Self::settle_pending_delay();
        if PendingDefaultAdminDelay::<T>::take().is_some() {
            Self::deposit_event(Event::DefaultAdminDelayChangeCanceled);
        }
    }

    pub(crate) fn do_begin_default_admin_transfer(new_admin: T::AccountId) {
        let now = frame_system::Pallet::<T>::block_number();
        let schedule = now.saturating_add(Self::default_admin_delay());

        if PendingDefaultAdmin::<T>::get().is_some() {
            Self::deposit_event(Event::DefaultAdminTransferCanceled);
        }
        PendingDefaultAdmin::<T>::put(PendingAdminTransfer { new_admin: new_admin.clone(), schedule });

        log::info!(
            target: LOG_TARGET,
            "admin transfer to {:?} scheduled, acceptable from block {:?}",
            new_admin,
            schedule
        );
        Self::deposit_event(Event::DefaultAdminTransferScheduled {
            new_admin,
            accept_schedule: schedule,
        });
    }

    pub(crate) fn do_accept_default_admin_transfer(caller: T::AccountId) -> DispatchResult {
        let pending = PendingDefaultAdmin::<T>::get().ok_or(Error::<T>::InvalidState)?;
        ensure!(pending.new_admin == caller, Error::<T>::Unauthorized);
        let now = frame_system::Pallet::<T>::block_number();
        ensure!(now >= pending.schedule, Error::<T>::DelayNotElapsed);

        PendingDefaultAdmin::<T>::kill();
        if let Some(previous) = DefaultAdmin::<T>::get() {
            Self::do_revoke_role(Role::DefaultAdmin, &previous, &caller);
        }
        DefaultAdmin::<T>::put(&caller);

        log::info!(target: LOG_TARGET, "default admin transferred to {:?}", caller);
        Self::deposit_event(Event::RoleGranted {
            role: Role::DefaultAdmin,
            account: caller.clone(),
            sender: caller,
        });
        Ok(())
    }

    /// Drop the pending admin transfer and any delay change not yet in force.
    pub(crate) fn do_cancel_default_admin_transfer() {
        if PendingDefaultAdmin::<T>::take().is_some() {
            log::info!(target: LOG_TARGET, "pending admin transfer canceled");
            Self::deposit_event(Event::DefaultAdminTransferCanceled);
        }
        Self::do_rollback_default_admin_delay();
    }
}
