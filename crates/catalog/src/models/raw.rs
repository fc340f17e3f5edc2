use serde::Deserialize;

/// A loosely-typed book mapping as it arrives from a dataset snapshot or an
/// upstream API, before validation.
///
/// Every field is optional here; [`BookRecord`](crate::BookRecord) decides
/// which absences are tolerable during normalization. Keeping this as a
/// separate type stops ad hoc shapes from leaking past the store boundary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    pub title: Option<String>,
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub year: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub page_count: Option<u32>,
    /// Accepts either `identifier` or the Internet Archive `ocaid` key.
    #[serde(alias = "ocaid")]
    pub identifier: Option<String>,
    #[serde(alias = "full_text_url")]
    pub source_url: Option<String>,
}

/// Snapshots are inconsistent about numeric fields: some rows carry them as
/// numbers, some as strings, some as null. All three must parse.
fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Numberish {
        Number(i64),
        Text(String),
        Null,
    }
    Ok(match Numberish::deserialize(deserializer)? {
        Numberish::Number(n) => u32::try_from(n).ok(),
        Numberish::Text(s) => s.trim().parse::<u32>().ok(),
        Numberish::Null => None,
    })
}
