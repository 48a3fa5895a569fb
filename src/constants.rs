//! Application-wide constants

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rows per result page, matching the legacy screen layout. The list table is
/// padded to this height so paging does not change the screen size.
pub const ROWS_PER_PAGE: usize = 7;

pub const ACCOUNT_ID_LEN: usize = 11;
pub const CARD_NUMBER_LEN: usize = 16;

/// Legacy transaction / program identifiers shown in each screen header.
pub const MENU_TRAN: &str = "CC00";
pub const MENU_PROGRAM: &str = "COMEN01";
pub const ADMIN_MENU_TRAN: &str = "CADM";
pub const ADMIN_MENU_PROGRAM: &str = "COADM01";
pub const ACCOUNT_VIEW_TRAN: &str = "CAVW";
pub const ACCOUNT_VIEW_PROGRAM: &str = "COACTVWC";
pub const CARD_LIST_TRAN: &str = "CCLI";
pub const CARD_LIST_PROGRAM: &str = "COCRDLIC";
pub const CARD_DETAIL_TRAN: &str = "CCDL";
pub const CARD_DETAIL_PROGRAM: &str = "COCRDSLC";
