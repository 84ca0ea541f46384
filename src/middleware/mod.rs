pub mod json;
pub mod session;

pub use json::JsonBody;
pub use session::AdminSession;
