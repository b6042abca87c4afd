#[path = "../helpers/mock_server.rs"]
mod mock_server;

mod end_to_end_test;
