/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const TASK_ROUTE_COMPONENT: &str = "task";
pub const TASK_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", TASK_ROUTE_COMPONENT);

pub const TASKS_ROUTE_COMPONENT: &str = "tasks";
pub const NEXTDATE_ROUTE_COMPONENT: &str = "nextdate";
pub const SIGNIN_ROUTE_COMPONENT: &str = "signin";

/// Cookie carrying the session token issued by sign-in.
pub const AUTH_TOKEN_COOKIE: &str = "token";

/// Storage format of task dates (`YYYYMMDD`).
pub const DATE_FORMAT: &str = "%Y%m%d";
/// Length of a formatted [`DATE_FORMAT`] string.
pub const DATE_FORMAT_LEN: usize = 8;

/// Date format accepted by the task search box (`DD.MM.YYYY`).
pub const SEARCH_DATE_FORMAT: &str = "%d.%m.%Y";
