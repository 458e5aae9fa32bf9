pub mod login;
mod ticket_board;

pub use login::LoginPage;
pub use ticket_board::TicketBoardPage;
