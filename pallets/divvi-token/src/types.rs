//! Types shared by the role registry and the delayed admin transfer.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// A capability group that gates privileged calls.
#[derive(
    Encode,
    Decode,
    DecodeWithMemTracking,
    Clone,
    Copy,
    PartialEq,
    Eq,
    RuntimeDebug,
    TypeInfo,
    MaxEncodedLen,
)]
pub enum Role {
    /// Top-level administrator. Held by at most one account and only moved
    /// through the delayed transfer.
    DefaultAdmin,
    /// May create new tokens.
    Minter,
}

impl Role {
    /// The role whose holder may grant and revoke `self`.
    pub fn admin_role(&self) -> Role {
        Role::DefaultAdmin
    }
}

/// An admin handover waiting to be claimed by `new_admin`.
#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct PendingAdminTransfer<AccountId, BlockNumber> {
    pub new_admin: AccountId,
    /// First block at which `new_admin` may accept.
    pub schedule: BlockNumber,
}

/// A delay change that replaces the current delay once `effect_schedule` is reached.
#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct PendingDelayChange<BlockNumber> {
    pub new_delay: BlockNumber,
    pub effect_schedule: BlockNumber,
}
