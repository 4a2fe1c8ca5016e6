mod handler;

pub use handler::handle_websocket;
