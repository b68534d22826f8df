pub use crate::cli::{command, run::run_app};
pub use crate::domain::{
    Birthday, BirthdayUpdate, ContactManager, PhoneNumber, UpcomingBirthday,
    birthdays::days_until,
    contact::{self, Contact},
};
pub use crate::errors::AppError;
pub use crate::storage::{self, ContactStore, StorageMediums, parse_storage_type};
