#[path = "../helpers/mock_server.rs"]
mod mock_server;
