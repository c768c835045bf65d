pub mod confirmation;
pub mod text_input;

pub use confirmation::ConfirmationProvider;
pub use text_input::TextInputProvider;
