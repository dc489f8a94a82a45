//! Query modules, one per table family. Every function here expects to
//! be called with the appropriate connection: mutations and compound
//! reads under the writer lock, single lookups on any connection.

pub mod group_ops;
pub mod record_ops;
pub mod roster_ops;
