//! Submission state machine of the card form.

pub mod controller;
pub mod state;
pub mod view;

pub use controller::CheckoutForm;
pub use state::FormStatus;
pub use view::FormView;
