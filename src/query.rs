//! Query-string parsing into an ordered multi-valued map.

/// Insertion-ordered multi-valued query parameters.
///
/// Key order is the order of first occurrence; a repeated key appends to
/// its existing value sequence. Created fresh per request and discarded
/// with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    entries: Vec<(String, Vec<String>)>,
}

impl QueryMap {
    /// All values bound to `key`, in occurrence order.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    /// The first value bound to `key`.
    #[must_use]
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|values| values.first()).map(String::as_str)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, values)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    fn append(&mut self, key: &str, value: String) {
        if let Some((_, values)) = self.entries.iter_mut().find(|(k, _)| k == key) {
            values.push(value);
        } else {
            self.entries.push((key.to_string(), vec![value]));
        }
    }
}

/// Parse the raw query component of a request URI.
///
/// `None` or blank input yields an empty map. The string is split on `&`
/// into pairs and each pair on its first `=` into key and value; a pair
/// with no `=` binds the key to an empty value rather than failing the
/// whole parse.
#[must_use]
pub fn parse_query(query: Option<&str>) -> QueryMap {
    let mut map = QueryMap::default();
    let Some(query) = query else {
        return map;
    };
    if query.trim().is_empty() {
        return map;
    }
    for pair in query.split('&') {
        match pair.split_once('=') {
            Some((key, value)) => map.append(key, value.to_string()),
            None => map.append(pair, String::new()),
        }
    }
    map
}
