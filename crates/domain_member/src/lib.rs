//! Member Ledger Domain
//!
//! Owns each member's balance and deposit history. Balances are signed
//! integers in the smallest currency unit: a negative balance represents
//! debt carried into the pool from outside.
//!
//! Balance mutations come from exactly three places:
//! - `deposit` (increment only, admin-triggered)
//! - the settlement engine (debit, never below zero)
//! - the reversal engine (credit, exact inverse of a settlement debit)

pub mod ledger;
pub mod member;
pub mod ports;
pub mod statement;

pub use ledger::{create_member, deposit, member_statements, unpaid_statement, unpaid_statement_by_name};
pub use member::Member;
pub use ports::MemberStore;
pub use statement::{UnpaidItem, UnpaidStatement};
