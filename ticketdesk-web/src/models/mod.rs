pub mod board;
pub mod session_context;
