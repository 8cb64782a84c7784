use std::sync::LazyLock;

use regex::Regex;

static TICKET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|/)?(SIS-\d+)").expect("ticket pattern is valid"));

/// Best-effort extraction of a ticket key from a branch name, e.g. `SIS-123`
/// from `feature/SIS-123-description`. Absence is normal, not an error.
pub fn extract_ticket(branch_name: &str) -> Option<String> {
    TICKET_PATTERN
        .captures(branch_name)
        .map(|captures| captures[1].to_string())
}
