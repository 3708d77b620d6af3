pub use crate::cli::{
    command::{self, Cli, Command},
    handlers::{SessionContext, dispatch},
    run_app, run_session,
};
pub use crate::domain::{
    Birthday, ContactStore, DEFAULT_WINDOW_DAYS, NaiveDate, Phone, Record, UpcomingBirthday,
    contact,
};
pub use crate::errors::AppError;
pub use crate::store::{
    self, JsonStorage, MemStorage, Storage, StorageMedium, parse_storage_type,
};
