pub mod side;

pub mod snapshot;

pub mod config;
