//! Sender allow-list for transfers.

use frame_support::{dispatch::DispatchResult, ensure};

use crate::{Config, Error, Event, Pallet, PermitTransfersOnly, PermittedSenders, LOG_TARGET};

impl<T: Config> Pallet<T> {
    /// Whether `who` may originate a transfer. Allow-list membership is ignored
    /// while the gate is off.
    pub fn can_transfer(who: &T::AccountId) -> bool {
        !PermitTransfersOnly::<T>::get() || PermittedSenders::<T>::get(who)
    }

    pub(crate) fn ensure_can_transfer(who: &T::AccountId) -> DispatchResult {
        let permitted = Self::can_transfer(who);
        if !permitted {
            log::debug!(target: LOG_TARGET, "transfer from {:?} rejected by gate", who);
        }
        ensure!(permitted, Error::<T>::TransferDenied);
        Ok(())
    }

    pub(crate) fn do_set_permitted_sender(account: T::AccountId, allowed: bool) {
        if allowed {
            PermittedSenders::<T>::insert(&account, true);
        } else {
            PermittedSenders::<T>::remove(&account);
        }
        Self::deposit_event(Event::PermittedSenderSet { account, allowed });
    }

    pub(crate) fn do_set_permit_transfers_only(enabled: bool) {
        PermitTransfersOnly::<T>::put(enabled);
        log::info!(target: LOG_TARGET, "permit-transfers-only set to {}", enabled);
        Self::deposit_event(Event::PermitTransfersOnlySet { enabled });
    }
}
