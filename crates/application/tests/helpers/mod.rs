#![allow(dead_code)]

mod mock_doh_client;

pub use mock_doh_client::MockDohClient;
