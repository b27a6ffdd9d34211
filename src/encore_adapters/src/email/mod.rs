pub mod mock_email_client;

pub use mock_email_client::MockEmailClient;
