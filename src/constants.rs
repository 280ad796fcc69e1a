pub const CLUBHOUSE_API_URL: &str = "https://api.clubhouse.io/api/v2/";
pub const SHEETS_API_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets/";
pub const CONFIG_FILE: &str = ".clubhouse-report-config.json";

pub const API_TOKEN_ENV: &str = "CLUBHOUSE_API_TOKEN";
pub const SHEETS_TOKEN_ENV: &str = "GOOGLE_SHEETS_ACCESS_TOKEN";
pub const SPREADSHEET_ID_ENV: &str = "CLUBHOUSE_SPREADSHEET_ID";

pub const TEAMS_PATH: &str = "teams";
pub const SEARCH_STORIES_PATH: &str = "search/stories";

pub const DEFAULT_PAGE_SIZE: u32 = 25;
pub const DEFAULT_MAX_PAGES: usize = 100;
pub const DEFAULT_SOURCE_LABEL: &str = "CLI";

// Columns the append call targets; Sheets extends the row past D on its own.
pub const SHEET_COLUMNS: &str = "A:D";

// Sheets append semantics: values parsed as if typed, new rows inserted.
pub const VALUE_INPUT_OPTION: &str = "USER_ENTERED";
pub const INSERT_DATA_OPTION: &str = "INSERT_ROWS";
