//! Authorization for replacing the runtime logic.
//!
//! The replacement itself belongs to the host. This module only answers whether
//! a caller may trigger it.

use frame_support::{dispatch::DispatchResult, traits::EnsureOrigin};
use frame_system::{pallet_prelude::OriginFor, RawOrigin};
use sp_std::marker::PhantomData;

use crate::{AuthorizedUpgrade, Config, Event, Pallet, Role, LOG_TARGET};

/// Origin check that succeeds for a signed origin of the current default admin.
///
/// A runtime can use this to gate its own code replacement path with the same
/// rule as [`Pallet::authorize_upgrade`].
pub struct EnsureDefaultAdmin<T>(PhantomData<T>);

impl<T: Config> EnsureOrigin<OriginFor<T>> for EnsureDefaultAdmin<T> {
    type Success = T::AccountId;

    fn try_origin(o: OriginFor<T>) -> Result<Self::Success, OriginFor<T>> {
        let raw: Result<RawOrigin<T::AccountId>, OriginFor<T>> = o.clone().into();
        match raw {
            Ok(RawOrigin::Signed(who)) if Pallet::<T>::has_role(Role::DefaultAdmin, &who) => {
                Ok(who)
            }
            _ => Err(o),
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<OriginFor<T>, ()> {
        Pallet::<T>::default_admin().map(|admin| RawOrigin::Signed(admin).into()).ok_or(())
    }
}

impl<T: Config> Pallet<T> {
    pub fn ensure_upgrade_authorized(who: &T::AccountId) -> DispatchResult {
        Self::ensure_role(Role::DefaultAdmin, who)
    }

    pub(crate) fn do_authorize_upgrade(code_hash: T::Hash) {
        AuthorizedUpgrade::<T>::put(code_hash);
        log::info!(target: LOG_TARGET, "code upgrade {:?} authorized", code_hash);
        Self::deposit_event(Event::UpgradeAuthorized { code_hash });
    }
}
