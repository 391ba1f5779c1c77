//! Registry tables, one module per interview phase.

pub(crate) mod closing;
pub(crate) mod cssrs;
pub(crate) mod insight;
pub(crate) mod interaksi;
pub(crate) mod orientation;
pub(crate) mod screening;
