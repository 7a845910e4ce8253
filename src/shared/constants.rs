/// Display text of the distinguished "all-in" category in the question bank
pub const ALL_IN_CATEGORY: &str = "ALL IN";

/// Minimum length for a team member's password
pub const MIN_PASSWORD_LENGTH: u64 = 8;
