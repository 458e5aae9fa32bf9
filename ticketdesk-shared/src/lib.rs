#![cfg_attr(not(test), forbid(unsafe_code))]
//! Wire models shared by the TicketDesk web client and its tests.

pub mod models;
