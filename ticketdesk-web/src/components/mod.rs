pub(crate) mod forward_popup;
pub(crate) mod ticket_row;
pub(crate) mod ticket_table;

// Re-export components for convenience
pub use forward_popup::ForwardPopup;
pub use ticket_table::TicketTable;
