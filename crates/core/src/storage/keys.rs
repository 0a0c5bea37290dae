//! Partition and sort key generation for the single-table layout.
//!
//! Pure functions, no side effects. Every record lives under a week partition:
//!
//! | Record | `pk` | `sk` |
//! |---|---|---|
//! | Picks | `WEEK#<week>` | `MEMBER#<member>` |
//! | Results | `WEEK#<week>` | `RESULTS` |

// ============================================================================
// Key prefixes
// ============================================================================

pub const WEEK_PREFIX: &str = "WEEK#";
pub const MEMBER_PREFIX: &str = "MEMBER#";
pub const RESULTS_SK: &str = "RESULTS";

// ============================================================================
// Week keys
// ============================================================================

/// Generate the partition key shared by every record of a week.
///
/// Pattern: `WEEK#<week>`
pub fn week_pk(week: &str) -> String {
    format!("{WEEK_PREFIX}{week}")
}

/// Extract the week identifier from a partition key.
///
/// Returns `None` when the key does not carry the `WEEK#` prefix.
pub fn parse_week_pk(pk: &str) -> Option<&str> {
    pk.strip_prefix(WEEK_PREFIX)
}

// ============================================================================
// Pick keys
// ============================================================================

/// Generate the sort key for a member's picks.
///
/// Pattern: `MEMBER#<member>`
pub fn member_sk(member: &str) -> String {
    format!("{MEMBER_PREFIX}{member}")
}

/// Extract the member identifier from a picks sort key.
pub fn parse_member_sk(sk: &str) -> Option<&str> {
    sk.strip_prefix(MEMBER_PREFIX)
}

/// Sort key prefix for querying every member's picks in a week.
///
/// Pattern: `MEMBER#`
pub fn member_sk_prefix() -> &'static str {
    MEMBER_PREFIX
}

// ============================================================================
// Result keys
// ============================================================================

/// Sort key of the single results record of a week.
pub fn results_sk() -> &'static str {
    RESULTS_SK
}
