use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A structured report field as it arrives from the data store.
///
/// Revisions stored these as a string, an array of lines, `null`, or not at
/// all. Everything is normalized here so nothing downstream has to care.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldText {
    #[default]
    Absent,
    /// Present but blank.
    Empty,
    /// Non-blank lines in order.
    Lines(Vec<String>),
}

impl FieldText {
    /// Split a string into lines; blank input gives `Empty`.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .map(|l| l.as_ref().trim_end().to_string())
            .filter(|l| !l.trim().is_empty())
            .collect();
        if lines.is_empty() { FieldText::Empty } else { FieldText::Lines(lines) }
    }

    pub fn is_absent(&self) -> bool { matches!(self, FieldText::Absent) }

    pub fn has_lines(&self) -> bool { matches!(self, FieldText::Lines(_)) }

    pub fn lines(&self) -> &[String] {
        match self {
            FieldText::Lines(lines) => lines,
            _ => &[],
        }
    }

    /// Lines joined with `\n`; empty for `Absent` and `Empty`.
    pub fn joined(&self) -> String { self.lines().join("\n") }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Text(String),
    Lines(Vec<Option<String>>),
}

impl<'de> Deserialize<'de> for FieldText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawField>::deserialize(deserializer)? {
            None => FieldText::Absent,
            Some(RawField::Text(text)) => FieldText::from_text(&text),
            Some(RawField::Lines(lines)) => FieldText::from_lines(lines.into_iter().flatten()),
        })
    }
}

impl Serialize for FieldText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldText::Absent => serializer.serialize_none(),
            _ => self.lines().serialize(serializer),
        }
    }
}
