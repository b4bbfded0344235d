//! Prompt construction for task-distribution analysis.

use nexa_core::text::split_comma_list;

/// The slice of a staff profile the model sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterEntry<'a> {
    pub name: &'a str,
    /// Comma-joined, as stored.
    pub skills: &'a str,
    /// Comma-joined, as stored.
    pub languages: &'a str,
}

/// Render one roster line per staff member:
/// `- {name} (Skills: {skills}, Languages: {languages})`.
///
/// Unlike the stored strings, the list fields are normalized: entries are
/// trimmed, empty ones dropped, and the rest re-joined with `", "`, so form
/// noise such as `"Rust,SQL ,, "` reaches the model as `"Rust, SQL"`.
pub fn roster_lines(staff: &[RosterEntry<'_>]) -> String {
    staff
        .iter()
        .map(|s| {
            format!(
                "- {} (Skills: {}, Languages: {})",
                s.name,
                split_comma_list(s.skills).join(", "),
                split_comma_list(s.languages).join(", "),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the full distribution prompt for a project description and roster.
///
/// The description is untrusted free text and is embedded as-is.
pub fn build_distribution_prompt(project_description: &str, staff: &[RosterEntry<'_>]) -> String {
    let roster = roster_lines(staff);
    format!(
        "As an expert IT Project Manager, analyze the following project and distribute \
         tasks among the available staff members.\n\
         \n\
         Project Description:\n\
         {project_description}\n\
         \n\
         Available Staff:\n\
         {roster}\n\
         \n\
         Please provide a detailed distribution of work. For each staff member, explain \
         why they were chosen for their specific tasks based on their skills.\n\
         Format the response in clear Markdown.\n"
    )
}
