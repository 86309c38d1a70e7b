pub(crate) mod config;
pub(crate) mod export;
pub(crate) mod games;
pub(crate) mod search;
pub(crate) mod shell;
