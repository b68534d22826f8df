pub mod birthdays;
pub mod contact;
pub mod manager;

use crate::errors::AppError;

pub use birthdays::UpcomingBirthday;
pub use contact::{Birthday, BirthdayUpdate, Contact, PhoneNumber};
pub use manager::ContactManager;
