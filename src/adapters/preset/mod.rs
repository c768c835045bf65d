//! Providers whose answer is known up front.
//!
//! Over HTTP the operator answers the prompt before the request is sent
//! (the borrower name in the body, the confirmation as a query flag), so the
//! handler wraps that answer in a provider for the duration of one command.

pub mod confirmation;
pub mod text_input;

pub use confirmation::PresetConfirmation;
pub use text_input::PresetTextInput;
