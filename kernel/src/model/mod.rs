pub mod booking;
pub mod guest;
pub mod history;
pub mod id;
pub mod ledger;
pub mod reference;
pub mod room;
