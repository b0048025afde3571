use std::any::Any;
use std::fmt;

/// A key/value annotation attached to one error instance.
///
/// Keys are free form and need not be unique. String values (`&'static str`
/// and `String`) are rendered as-is; any other value is rendered with its
/// single-line `Debug` output.
pub struct MetadataEntry {
    key: String,
    value: Value,
}

enum Value {
    Text(String),
    Other(Box<dyn fmt::Debug + Send + Sync>),
}

impl Value {
    fn classify<V>(value: V) -> Self
    where
        V: fmt::Debug + Send + Sync + 'static,
    {
        let any = &value as &dyn Any;
        if let Some(text) = any.downcast_ref::<&'static str>() {
            return Value::Text((*text).to_string());
        }
        if let Some(text) = any.downcast_ref::<String>() {
            return Value::Text(text.clone());
        }
        Value::Other(Box::new(value))
    }
}

impl MetadataEntry {
    pub fn new<V>(key: impl Into<String>, value: V) -> Self
    where
        V: fmt::Debug + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            value: Value::classify(value),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &(dyn fmt::Debug + Send + Sync) {
        match &self.value {
            Value::Text(text) => text as &(dyn fmt::Debug + Send + Sync),
            Value::Other(value) => value.as_ref(),
        }
    }
}

/// `{"<key>": <value>}`
impl fmt::Debug for MetadataEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:?}: ", self.key)?;
        match &self.value {
            Value::Text(text) => f.write_str(text)?,
            Value::Other(value) => write!(f, "{value:?}")?,
        }
        f.write_str("}")
    }
}

silent_fmt!(MetadataEntry: Display, LowerHex, UpperHex, Octal, Binary, LowerExp, UpperExp);

/// Ordered collection of [`MetadataEntry`], in insertion order.
#[derive(Default)]
pub struct Metadata {
    entries: Vec<MetadataEntry>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<MetadataEntry>) -> Self {
        Self { entries }
    }

    pub fn push<V>(&mut self, key: impl Into<String>, value: V)
    where
        V: fmt::Debug + Send + Sync + 'static,
    {
        self.entries.push(MetadataEntry::new(key, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetadataEntry> {
        self.entries.iter()
    }

    /// Value of the first entry stored under `key`.
    pub fn get(&self, key: &str) -> Option<&(dyn fmt::Debug + Send + Sync)> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(MetadataEntry::value)
    }
}

/// `[<entry>,<entry>,...]`, no spaces between entries.
impl fmt::Debug for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{entry:?}")?;
        }
        f.write_str("]")
    }
}

silent_fmt!(Metadata: Display, LowerHex, UpperHex, Octal, Binary, LowerExp, UpperExp);

impl FromIterator<MetadataEntry> for Metadata {
    fn from_iter<I: IntoIterator<Item = MetadataEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<MetadataEntry> for Metadata {
    fn extend<I: IntoIterator<Item = MetadataEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl From<Vec<MetadataEntry>> for Metadata {
    fn from(entries: Vec<MetadataEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl IntoIterator for Metadata {
    type Item = MetadataEntry;
    type IntoIter = std::vec::IntoIter<MetadataEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = &'a MetadataEntry;
    type IntoIter = std::slice::Iter<'a, MetadataEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
