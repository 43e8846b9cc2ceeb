//! Task editing core for Make It So.
//!
//! A [`TaskEditSession`](ops::TaskEditSession) owns the working copy of one
//! task while it is being edited and commits it through a
//! [`TaskBackend`](io::TaskBackend). The `mis` binary is a thin front end
//! over the same session.

pub mod cli;
pub mod io;
pub mod logging;
pub mod model;
pub mod ops;
