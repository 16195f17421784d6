// Interface adapters: HTTP protocol and request handling.

pub mod handlers;
pub mod http;
pub mod protocol;
pub mod routes;
pub mod state;
