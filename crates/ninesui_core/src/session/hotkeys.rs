//! Dynamic sort hotkey assignment.

use std::collections::BTreeMap;

/// Assigns one uppercase hotkey per visible field.
///
/// For each field, in order, the first alphabetic character whose
/// uppercase form is still free becomes its sort key. Fields whose every
/// letter is taken get no key.
pub fn assign_sort_hotkeys(fields: &[String]) -> BTreeMap<char, String> {
    let mut assigned: BTreeMap<char, String> = BTreeMap::new();
    for field in fields {
        for ch in field.chars() {
            if !ch.is_alphabetic() {
                continue;
            }
            let key = ch.to_ascii_uppercase();
            if assigned.contains_key(&key) {
                continue;
            }
            assigned.insert(key, field.clone());
            break;
        }
    }
    assigned
}
