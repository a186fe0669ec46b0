/// Derives a machine code from a human-readable name.
///
/// Lowercases the input and replaces spaces and hyphens with underscores,
/// so `"Fast Pay"` becomes `"fast_pay"`. The transform is deterministic:
/// the same name always yields the same code.
pub fn name_to_code(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}
