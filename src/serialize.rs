//! `serde` support for [`SeqList`], which (de)serialises as a plain sequence.

use crate::SeqList;
use serde::{
    de::{Deserialize, Deserializer, SeqAccess, Visitor,},
    ser::{Serialize, Serializer,},
};
use std::{fmt, marker::PhantomData,};

impl<T: Serialize,> Serialize for SeqList<T,> {
    #[inline]
    fn serialize<S,>(&self, serializer: S,) -> Result<S::Ok, S::Error,>
        where S: Serializer, {
        serializer.collect_seq(self,)
    }
}

/// Pushes each element of a sequence onto the back of a new [`SeqList`].
struct SeqListVisitor<T,>(PhantomData<T,>,);

impl<'de, T: Deserialize<'de>,> Visitor<'de> for SeqListVisitor<T,> {
    type Value = SeqList<T,>;

    fn expecting(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.write_str("a sequence",)
    }
    fn visit_seq<A,>(self, mut seq: A,) -> Result<Self::Value, A::Error,>
        where A: SeqAccess<'de>, {
        let mut list = SeqList::new();

        while let Some(value) = seq.next_element()? { list.push_back(value,) }

        Ok(list)
    }
}

impl<'de, T: Deserialize<'de>,> Deserialize<'de> for SeqList<T,> {
    #[inline]
    fn deserialize<D,>(deserializer: D,) -> Result<Self, D::Error,>
        where D: Deserializer<'de>, {
        deserializer.deserialize_seq(SeqListVisitor(PhantomData,),)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_round_trip() {
        let list = vec![None, Some("x".to_owned()),].into_iter().collect::<SeqList<Option<String>>>();
        let json = serde_json::to_string(&list).expect("failed to serialise list");

        assert_eq!(json, r#"[null,"x"]"#, "`SeqList` did not serialise as a sequence",);

        let back: SeqList<Option<String>> = serde_json::from_str(&json).expect("failed to deserialise list");
        assert_eq!(back, list, "`SeqList` did not deserialise to the same values",);
        assert_eq!(back.back(), Some(&Some("x".to_owned())), "`SeqList::back` lost after deserialising",);
    }
}
