mod operation;
mod welcome;

pub use operation::Operation;
pub use welcome::WelcomeResponse;
