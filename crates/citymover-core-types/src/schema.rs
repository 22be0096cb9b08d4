//! Canonical schema constants for structured logging and events
//!
//! Every log line emitted through the logging macros uses these keys, so a
//! log consumer can filter on them without knowing which crate emitted it.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_USER_ID: &str = "user_id";
pub const FIELD_USERNAME: &str = "username";
pub const FIELD_CITY_ID: &str = "city_id";
pub const FIELD_PROPERTY_ID: &str = "property_id";
pub const FIELD_OWNER_ID: &str = "owner_id";
pub const FIELD_AREA: &str = "area";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
