//! Cache key derivation.
//!
//! A key is `snake_case(entity_name) + "." + sub_key`. The same key
//! addresses both the local store and the remote cache, so the two layers
//! always refer to the same logical dataset per entity type.

/// Sub-key for whole-collection lookups.
pub const SUB_KEY_ALL: &str = "all";

/// Derive the cache key for an entity type and sub-key.
///
/// `"UserAccount"` with sub-key `"all"` yields `"user_account.all"`.
pub fn lookup_key(entity_name: &str, sub_key: &str) -> String {
    format!("{}.{}", snake_case(entity_name), sub_key)
}

/// Lower-case, underscore-separated form of a CamelCase type name.
///
/// An underscore is inserted before every upper-case letter past the first
/// character, then everything is lower-cased. Names already in snake_case
/// pass through unchanged.
fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
