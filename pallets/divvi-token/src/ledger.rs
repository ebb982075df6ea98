//! Balance and allowance bookkeeping.
//!
//! Callers apply the role and gate checks first. Each `do_*` function computes
//! every new value before writing any of them.

use frame_support::{dispatch::DispatchResult, ensure};

use crate::{Allowances, Balances, Config, Error, Event, Pallet, TotalSupply};

/// Allowance value that is never decremented by `transfer_from`.
pub const UNLIMITED_ALLOWANCE: u128 = u128::MAX;

impl<T: Config> Pallet<T> {
    pub(crate) fn do_mint(to: &T::AccountId, amount: u128) -> DispatchResult {
        let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
        let balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        TotalSupply::<T>::put(supply);
        Balances::<T>::insert(to, balance);
        Self::deposit_event(Event::Minted { to: to.clone(), amount });
        Ok(())
    }

    pub(crate) fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        let balances = Self::checked_balances(from, to, amount)?;
        Self::commit_transfer(from, to, amount, balances);
        Ok(())
    }

    pub(crate) fn do_transfer_from(
        spender: &T::AccountId,
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        let allowance = Allowances::<T>::get(from, spender);
        ensure!(allowance >= amount, Error::<T>::InsufficientAllowance);
        let balances = Self::checked_balances(from, to, amount)?;

        if allowance != UNLIMITED_ALLOWANCE {
            Allowances::<T>::insert(from, spender, allowance - amount);
        }
        Self::commit_transfer(from, to, amount, balances);
        Ok(())
    }

    pub(crate) fn do_approve(owner: &T::AccountId, spender: &T::AccountId, amount: u128) {
        Allowances::<T>::insert(owner, spender, amount);
        Self::deposit_event(Event::Approval {
            owner: owner.clone(),
            spender: spender.clone(),
            amount,
        });
    }

    /// New `(from, to)` balances after moving `amount`, or `None` for a
    /// self-transfer, which leaves balances untouched.
    fn checked_balances(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> Result<Option<(u128, u128)>, Error<T>> {
        let from_balance = Balances::<T>::get(from);
        ensure!(from_balance >= amount, Error::<T>::InsufficientBalance);
        if from == to {
            return Ok(None);
        }
        let to_balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
        Ok(Some((from_balance - amount, to_balance)))
    }

    fn commit_transfer(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
        balances: Option<(u128, u128)>,
    ) {
        if let Some((from_balance, to_balance)) = balances {
            Balances::<T>::insert(from, from_balance);
            Balances::<T>::insert(to, to_balance);
        }
        Self::deposit_event(Event::Transferred { from: from.clone(), to: to.clone(), amount });
    }
}
