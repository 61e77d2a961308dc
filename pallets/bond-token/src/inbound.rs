//! Refuses native value sent straight to the ledger's own account.
//!
//! The ledger account holds no native funds: anything deposited there would
//! have no matching entry in the token ledger. The runtime plugs
//! [`RejectInboundValue`] into `frame_system::Config::BaseCallFilter` and
//! describes its native-transfer calls through [`InboundValue`].

use frame_support::traits::Contains;
use sp_std::marker::PhantomData;

use crate::{Config, Pallet, LOG_TARGET};

/// Recognises runtime calls that move native value to an account.
pub trait InboundValue<Call, AccountId> {
    /// The recipient of the native value carried by `call`, if any.
    fn recipient(call: &Call) -> Option<AccountId>;
}

impl<Call, AccountId> InboundValue<Call, AccountId> for () {
    fn recipient(_call: &Call) -> Option<AccountId> {
        None
    }
}

/// Call filter letting every call through except native transfers into
/// [`Pallet::account_id`].
pub struct RejectInboundValue<T, R>(PhantomData<(T, R)>);

impl<T, R> Contains<<T as frame_system::Config>::RuntimeCall> for RejectInboundValue<T, R>
where
    T: Config,
    R: InboundValue<<T as frame_system::Config>::RuntimeCall, T::AccountId>,
{
    fn contains(call: &<T as frame_system::Config>::RuntimeCall) -> bool {
        match R::recipient(call) {
            Some(dest) if dest == Pallet::<T>::account_id() => {
                log::warn!(target: LOG_TARGET, "rejected native value sent to the ledger account");
                false
            }
            _ => true,
        }
    }
}
