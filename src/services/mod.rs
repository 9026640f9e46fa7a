// Service exports
pub mod email;
pub mod postgres;
pub mod sms;

pub use email::MailerClient;
pub use postgres::PostgresClient;
pub use sms::SmsClient;
