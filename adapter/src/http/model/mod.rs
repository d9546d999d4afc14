pub mod booking;
pub mod guest;
pub mod ledger;
pub mod reference;
pub mod room;
