//! Constants used throughout the application
//!
//! This module centralizes display patterns, user-facing text, and other constant
//! values to improve maintainability and consistency.

// Display formats
/// Separator between the date and time segments of the display format
pub const DATE_TIME_SEPARATOR: &str = " - ";
/// Shown in place of a value that cannot be rendered
pub const PLACEHOLDER: &str = "-";

// Duration Text
/// Shown instead of a duration while a timer is still running
pub const IN_PROGRESS: &str = "در حال انجام";
pub const HOURS_UNIT: &str = "ساعت";

// Dashboard
pub const UNKNOWN_PROJECT: &str = "Unknown Project";
pub const RECENT_ACTIVITY_DEFAULT_LIMIT: usize = 5;
pub const RECENT_ACTIVITY_MAX_LIMIT: usize = 50;

// Form Validation Messages
pub const ERROR_INVALID_START_TIME: &str =
    "فرمت زمان شروع نادرست است. لطفا به صورت yyyy/MM/dd - HH:mm وارد کنید";
pub const ERROR_INVALID_END_TIME: &str =
    "فرمت زمان پایان نادرست است. لطفا به صورت yyyy/MM/dd - HH:mm وارد کنید";

// Password Policy
pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const ERROR_PASSWORD_TOO_SHORT: &str = "رمز عبور باید حداقل ۶ کاراکتر باشد";
pub const ERROR_PASSWORD_NO_UPPERCASE: &str = "رمز عبور باید حداقل یک حرف بزرگ داشته باشد";
pub const ERROR_PASSWORD_NO_DIGIT: &str = "رمز عبور باید حداقل یک عدد داشته باشد";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const PASSWORD_ACCEPTED: &str = "✅ Password meets all requirements";

// Files
pub const CONFIG_FILE_NAME: &str = "timecard.toml";
pub const APP_DIR_NAME: &str = "timecard";
pub const LOG_FILE_NAME: &str = "timecard.log";
