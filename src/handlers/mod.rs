pub mod docs;
pub mod fallback;
pub mod health;
pub mod history;
pub mod math;
pub mod root;
