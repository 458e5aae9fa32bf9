pub mod auth;
pub mod errors;
pub mod ticket;
pub mod token;

pub use auth::{LoginRequest, LoginResponse};
pub use errors::TokenError;
pub use ticket::{
    ForwardTicketRequest, Ticket, TicketAuthor, TicketId, TicketStatus, UpdateTicketRequest,
};
pub use token::{TokenClaims, decode_token_claims};
