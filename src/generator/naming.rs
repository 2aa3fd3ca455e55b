//! Identifier normalization shared by every artifact.
//!
//! All casing decisions in generated code go through these four functions so
//! the entity, DTO, service, resource, repository and mapper can never disagree
//! on a name. They operate on ASCII snake_case / camelCase conventions; input
//! that does not follow those conventions is transformed lossily.

/// Convert `snake_case` to `camelCase`
///
/// Each underscore is dropped and the character after it is upper-cased. The
/// first character keeps its case, so `user_profile` becomes `userProfile`,
/// not `UserProfile`; combine with [`capitalize`] for type names.
///
/// ```rust
/// use crudforge::generator::snake_to_camel;
/// assert_eq!(snake_to_camel("first_name"), "firstName");
/// ```
pub fn snake_to_camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = false;
    for c in s.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Upper-case the first character and leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character and leave the rest untouched
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert `camelCase` back to `snake_case`
///
/// An underscore is inserted wherever an ASCII lower-case letter is directly
/// followed by an ASCII upper-case letter, then the whole string is lower-cased.
/// Runs of capitals are not split: `HTTPServer` becomes `httpserver`.
pub fn camel_to_snake(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            out.push('_');
        }
        prev_lower = c.is_ascii_lowercase();
        out.push(c);
    }
    out.to_lowercase()
}

/// Type-style identifier for a table: `user_profile` → `UserProfile`
pub fn entity_name(raw_table_name: &str) -> String {
    capitalize(&snake_to_camel(raw_table_name))
}

/// True if `s` is a Java identifier: `[A-Za-z_$][A-Za-z0-9_$]*`
///
/// Only ASCII is accepted. Generated names end up in file names as well as in
/// source, so path separators and dots must never get through.
pub fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
