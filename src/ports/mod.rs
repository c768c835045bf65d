pub mod confirmation;
pub mod text_input;

pub use confirmation::*;
pub use text_input::*;
