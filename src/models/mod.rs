pub mod hotel;
pub mod restaurant;
pub mod transport;
pub mod trip;
pub mod user;

pub use hotel::Hotel;
pub use restaurant::Restaurant;
pub use transport::TransportOption;
pub use trip::Trip;
pub use user::User;
