use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Deserialize an optional UUID, treating an empty string as absent.
pub fn deserialize_optional_uuid<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => Uuid::parse_str(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "deserialize_optional_uuid")]
        id: Option<Uuid>,
    }

    #[test]
    fn test_empty_string_is_none() {
        let params: Params = serde_json::from_str(r#"{"id":""}"#).unwrap();
        assert!(params.id.is_none());
    }

    #[test]
    fn test_valid_uuid_parses() {
        let id = Uuid::new_v4();
        let params: Params = serde_json::from_str(&format!(r#"{{"id":"{}"}}"#, id)).unwrap();
        assert_eq!(params.id, Some(id));
    }

    #[test]
    fn test_garbage_is_error() {
        let result: Result<Params, _> = serde_json::from_str(r#"{"id":"not-a-uuid"}"#);
        assert!(result.is_err());
    }
}
