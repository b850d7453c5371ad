pub mod commodity;
pub mod ledger;
pub mod snapshot;
pub mod state;
pub mod summary;
pub mod transaction;
