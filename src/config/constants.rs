//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Programs & Billing
// =============================================================================

/// Label for the undergraduate/diploma program track
pub const PROGRAM_S1D3D4: &str = "S1D3D4";

/// Label for the postgraduate program track
pub const PROGRAM_S2: &str = "S2";

/// Bill amount for the S1/D3/D4 track
pub const S1D3D4_BILL: u64 = 175_000;

/// Bill amount for the S2 track
pub const S2_BILL: u64 = 250_000;

// =============================================================================
// Registration Status
// =============================================================================

/// Status assigned to a freshly persisted registration
pub const STATUS_CREATED: &str = "created";

/// Status after the virtual-account confirmation step
pub const STATUS_UPDATED: &str = "updated";

// =============================================================================
// Validation Messages
// =============================================================================

pub const MSG_NAME_EMPTY: &str = "Name Is Empty";
pub const MSG_EMAIL_EMPTY: &str = "Email Is Empty";
pub const MSG_EMAIL_INVALID: &str = "Email Is Not Valid";
pub const MSG_PHONE_EMPTY: &str = "Phone Is Empty";
pub const MSG_PHONE_INVALID: &str = "Phone Number Is Not Valid";
pub const MSG_PROGRAM_NOT_AVAILABLE: &str = "Please Choose Between S1D3D4 or S2";
pub const MSG_VA_EMPTY: &str = "Virtual Account Is Empty";

/// Violation codes surfaced in the validation error map
pub const CODE_REQUIRED_NAME: &str = "Required_Name";
pub const CODE_REQUIRED_EMAIL: &str = "Required_Email";
pub const CODE_INVALID_EMAIL: &str = "invalid_Email";
pub const CODE_REQUIRED_PHONE: &str = "Required_Phone";
pub const CODE_INVALID_PHONE: &str = "invalid_Phone";
pub const CODE_PROGRAM_NOT_AVAILABLE: &str = "Program_Not_Available";
pub const CODE_REQUIRED_VA: &str = "Required_VA";

// =============================================================================
// Conflict & Lookup Messages
// =============================================================================

pub const MSG_EMAIL_RECORDED: &str = "email has been recorded";
pub const MSG_PHONE_RECORDED: &str = "phone has been recorded";
pub const MSG_VA_NOT_FOUND: &str = "va not found";

// =============================================================================
// Storage
// =============================================================================

/// Collection holding registration records
pub const COLLECTION_REGISTRATIONS: &str = "registrations";

/// Collection holding student aggregates
pub const COLLECTION_STUDENTS: &str = "students";

/// Default MongoDB connection URL (for development)
pub const DEFAULT_MONGODB_URL: &str = "mongodb://localhost:27017";

/// Default database name
pub const DEFAULT_DATABASE_NAME: &str = "registration";

/// Default per-operation storage deadline in seconds
pub const DEFAULT_STORAGE_TIMEOUT_SECS: u64 = 10;

/// Sentinel returned by `delete` when a document was removed
pub const DELETE_OK: &str = "DELETED";

/// Sentinel returned by `delete` when no document matched
pub const DELETE_NOT_FOUND: &str = "ID NOT FOUND";

// =============================================================================
// Credentials
// =============================================================================

/// Length of generated passwords
pub const PASSWORD_LENGTH: usize = 12;

/// Number of random digits appended to generated usernames
pub const USERNAME_SUFFIX_DIGITS: usize = 4;

/// Length of generated virtual-account identifiers
pub const VIRTUAL_ACCOUNT_DIGITS: usize = 13;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;
