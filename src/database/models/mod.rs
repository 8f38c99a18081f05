pub mod company;
pub mod contract;
pub mod user;

pub use company::Company;
pub use contract::Contract;
pub use user::User;
