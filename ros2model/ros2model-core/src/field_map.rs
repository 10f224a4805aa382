use indexmap::IndexMap;

/// Ordered mapping from field name to type descriptor.
///
/// Iteration follows declaration order. Re-declaring a name replaces the
/// descriptor but keeps the position of the first declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap(IndexMap<String, String>);

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning the descriptor it replaced, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(name.into(), descriptor.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `(name, descriptor)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, descriptor) in iter {
            map.insert(name, descriptor);
        }
        map
    }
}
