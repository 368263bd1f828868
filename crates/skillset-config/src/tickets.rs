//! Ticket references for PR descriptions

/// Text used when a PR has no associated tickets
pub const NO_TICKETS_PLACEHOLDER: &str = "N/A";

/// Split raw ticket arguments into identifiers
///
/// Each argument may hold several identifiers separated by commas or whitespace.
pub fn parse_ticket_ids<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .flat_map(|arg| {
            arg.as_ref()
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Link to a single ticket: `{base_url}/{ticket_id}`
#[must_use]
pub fn ticket_url(base_url: &str, ticket_id: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), ticket_id)
}

/// Render the tickets section of a PR description
///
/// With a base URL every ticket becomes a markdown link; without one the bare
/// identifiers are listed. No tickets renders [`NO_TICKETS_PLACEHOLDER`].
pub fn render_ticket_links<S: AsRef<str>>(base_url: Option<&str>, ticket_ids: &[S]) -> String {
    if ticket_ids.is_empty() {
        return NO_TICKETS_PLACEHOLDER.to_string();
    }

    ticket_ids
        .iter()
        .map(|id| {
            let id = id.as_ref();
            match base_url {
                Some(base) => format!("[{id}]({})", ticket_url(base, id)),
                None => id.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
