//! URL paths shared by the IMS server and its browser client.
//!
//! [`routes`] holds the table itself: one typed constant per path template plus
//! a name-keyed lookup. The remaining modules make up a small service that
//! serves the table as `/ims/urls.js` and as JSON.

pub mod api_doc;
pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod template;
pub mod urls_js;
