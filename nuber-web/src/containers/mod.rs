pub mod header;
pub mod logged_in;
pub mod logged_out;

pub use logged_in::LoggedInRouter;
pub use logged_out::LoggedOutRouter;
