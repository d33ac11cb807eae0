//! Member ledger storage port
//!
//! The storage collaborator implements this trait; ledger operations run
//! against it inside one atomic unit of work owned by the caller.

use core_kernel::MemberId;

use crate::member::Member;
use crate::statement::UnpaidItem;

/// Storage operations the member ledger requires
pub trait MemberStore {
    /// Looks up a member by id
    fn member(&self, id: MemberId) -> Option<&Member>;

    /// Looks up a member by unique name
    fn member_by_name(&self, name: &str) -> Option<&Member>;

    /// Mutable member access
    fn member_mut(&mut self, id: MemberId) -> Option<&mut Member>;

    /// Inserts a new member; the caller has already checked name uniqueness
    fn insert_member(&mut self, member: Member);

    /// All members, insertion order
    fn members(&self) -> Vec<&Member>;

    /// The member's PENDING participant shares, oldest first, joined with
    /// transaction and service data for display
    fn pending_shares(&self, member: MemberId) -> Vec<UnpaidItem>;
}
