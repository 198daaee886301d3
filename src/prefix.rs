//! Longest literal prefix resolution for grouping routes by mount point.

use std::collections::HashSet;

/// The longest literal prefix of each pattern, deduplicated.
///
/// The prefix is everything before the first `(` - the start of the first
/// capturing group in the pattern's regex form. A prefix longer than one
/// character loses its trailing `/`; a pattern with no group at all is its
/// own prefix. Duplicates collapse in the returned set.
///
/// Used once at registration time to group sibling routes (several
/// `/shop/:aisle/...` routes, say) under one mount context instead of
/// re-deriving it per request.
#[must_use]
pub fn longest_prefixes<I, S>(patterns: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|pattern| {
            let pattern = pattern.as_ref();
            match pattern.find('(') {
                Some(group_start) => {
                    let prefix = &pattern[..group_start];
                    if prefix.len() > 1 && prefix.ends_with('/') {
                        prefix[..prefix.len() - 1].to_string()
                    } else {
                        prefix.to_string()
                    }
                }
                None => pattern.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_deduplicate_and_keep_group_free_patterns() {
        let paths = [
            r"^/commits/(\w+)(?:\.\.(\w+))?$",
            "/series/:title/episode/:num/actors",
            "/shop/:aile/bananas",
            "/shop/:aile/bananas",
            "/commits/:from..:to",
            "/flights/:airport/:depart-:arrive/:gate",
        ];
        let prefixes = longest_prefixes(paths);
        assert_eq!(prefixes.len(), 5);
        assert!(prefixes.contains("^/commits"));
        assert!(prefixes.contains("/series/:title/episode/:num/actors"));
        assert!(prefixes.contains("/shop/:aile/bananas"));
        assert!(prefixes.contains("/commits/:from..:to"));
        assert!(prefixes.contains("/flights/:airport/:depart-:arrive/:gate"));
    }

    #[test]
    fn single_character_prefix_keeps_its_slash() {
        let prefixes = longest_prefixes([r"^/(\w+)$"]);
        assert!(prefixes.contains("^"));
        let prefixes = longest_prefixes([r"/([\w-]+)"]);
        assert!(prefixes.contains("/"));
    }
}
