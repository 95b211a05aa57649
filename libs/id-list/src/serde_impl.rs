//! Serde support: a list serializes as a sequence of canonical ID strings.

use idkit_id::Identifier;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::IdList;

impl<I> Serialize for IdList<I>
where
    I: Identifier + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, I> Deserialize<'de> for IdList<I>
where
    I: Identifier + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ids = Vec::<I>::deserialize(deserializer)?;
        Self::from_ids(ids).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use idkit_id::{define_id, Uuid};

    use crate::{IdList, IdListError};

    define_id!(UserId, "user");

    fn user(n: u128) -> UserId {
        UserId::from_uuid(Uuid::from_u128(n))
    }

    #[test]
    fn test_serializes_as_string_array() {
        let list = IdList::from_ids([user(1), user(2)]).unwrap();
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json, serde_json::json!(list.ids_as_string_list()));
    }

    #[test]
    fn test_json_roundtrip_keeps_order() {
        let list = IdList::from_ids([user(3), user(1), user(2)]).unwrap();
        let json = serde_json::to_string(&list).unwrap();
        let parsed: IdList<UserId> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_slice(), list.as_slice());
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let id = user(1).to_string();
        let json = format!("[\"{id}\", \"{id}\"]");
        let err = serde_json::from_str::<IdList<UserId>>(&json).unwrap_err();

        let expected = IdListError::DuplicateIds {
            kind: "user",
            duplicates: vec![id],
        };
        assert!(err.to_string().contains(&expected.to_string()));
    }

    #[test]
    fn test_deserialize_rejects_invalid_id() {
        let result = serde_json::from_str::<IdList<UserId>>("[\"not-an-id\"]");
        assert!(result.is_err());
    }
}
