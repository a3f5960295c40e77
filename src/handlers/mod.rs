// Handler modules
pub mod init;
pub mod layout;

// Re-export all handler functions
pub use init::handle_init;
pub use layout::{handle_layout, LayoutFacts};
