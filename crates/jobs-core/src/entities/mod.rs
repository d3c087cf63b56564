//! Domain entities - core business objects

mod company;
mod job;
mod user;

pub use company::{Company, NewCompany};
pub use job::{Job, NewJob};
pub use user::{NewUser, User};
