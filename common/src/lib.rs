//! Types shared between the Roster API server and its clients.
//!
//! [`params`] holds the request bodies the API accepts, [`views`] the
//! representations it returns. Neither side does any I/O.

pub mod params;
pub mod views;
