// Static gift catalog: the taxonomy and the read-only endpoints over it.

pub mod handlers;
pub mod taxonomy;
