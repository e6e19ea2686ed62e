pub mod health;
pub mod get;
pub mod list;
pub mod script;

pub use health::health_handler;
pub use get::get_handler;
pub use list::list_handler;
pub use script::urls_js_handler;
