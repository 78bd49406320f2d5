// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`BoundedList`](crate::BoundedList) and
//! [`OverflowPolicy`](crate::OverflowPolicy).
//!
//! - **Serialize**: a list becomes a struct `{ capacity, items }`, where
//!   `items` is the sequence of elements front to back.
//! - **Deserialize**: the list is rebuilt with its recorded capacity and the
//!   items are added one at a time, so a payload holding more items than its
//!   capacity is rejected.
//! - An [`OverflowPolicy`](crate::OverflowPolicy) is its lowercase name
//!   (`"fail"`).

// Crate imports
use crate::{list::BoundedList, policy::OverflowPolicy, store::SequenceStore};

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

struct Items<'a, T, S>(&'a S, PhantomData<fn() -> T>);

impl<T: Serialize, S: SequenceStore<T>> Serialize for Items<'_, T, S> {
    fn serialize<Z: Serializer>(&self, s: Z) -> Result<Z::Ok, Z::Error> {
        s.collect_seq(self.0.iter())
    }
}

impl<T: Serialize, S: SequenceStore<T>> Serialize for BoundedList<T, S> {
    fn serialize<Z: Serializer>(&self, s: Z) -> Result<Z::Ok, Z::Error> {
        use ser::SerializeStruct;
        let mut st = s.serialize_struct("BoundedList", 2)?;
        st.serialize_field("capacity", &self.capacity)?;
        st.serialize_field("items", &Items(&self.store, PhantomData))?;
        st.end()
    }
}

const LIST_FIELDS: &[&str] = &["capacity", "items"];

enum Field {
    Capacity,
    Items,
}

struct FieldVisitor;

impl de::Visitor<'_> for FieldVisitor {
    type Value = Field;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("`capacity` or `items`")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        match v {
            0 => Ok(Field::Capacity),
            1 => Ok(Field::Items),
            _ => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v {
            "capacity" => Ok(Field::Capacity),
            "items" => Ok(Field::Items),
            other => Err(E::unknown_field(other, LIST_FIELDS)),
        }
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_identifier(FieldVisitor)
    }
}

// Adds each element to the list as it is read, stopping at the first one
// that does not fit.
struct ItemsSeed<'a, T, S>(&'a mut BoundedList<T, S>);

impl<'de, T, S> de::DeserializeSeed<'de> for ItemsSeed<'_, T, S>
where
    T: Deserialize<'de>,
    S: SequenceStore<T>,
{
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, d: D) -> Result<(), D::Error> {
        d.deserialize_seq(self)
    }
}

impl<'de, T, S> de::Visitor<'de> for ItemsSeed<'_, T, S>
where
    T: Deserialize<'de>,
    S: SequenceStore<T>,
{
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence with at most {} elements", self.0.capacity())
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<(), A::Error> {
        while let Some(elem) = a.next_element::<T>()? {
            self.0
                .add(elem)
                .map_err(|e| de::Error::custom(format_args!("too many elements: {e}")))?;
        }
        Ok(())
    }
}

struct ListVisitor<T, S>(PhantomData<fn() -> (T, S)>);

impl<'de, T, S> de::Visitor<'de> for ListVisitor<T, S>
where
    T: Deserialize<'de>,
    S: SequenceStore<T>,
{
    type Value = BoundedList<T, S>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("struct BoundedList")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let capacity: usize = a
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let mut list = BoundedList::with_capacity(capacity);
        a.next_element_seed(ItemsSeed(&mut list))?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        Ok(list)
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut list: Option<BoundedList<T, S>> = None;
        // Only used when `items` precedes `capacity`.
        let mut pending: Option<Vec<T>> = None;
        let mut seen_items = false;

        while let Some(key) = a.next_key::<Field>()? {
            match key {
                Field::Capacity => {
                    if list.is_some() {
                        return Err(de::Error::duplicate_field("capacity"));
                    }
                    let mut fresh = BoundedList::with_capacity(a.next_value::<usize>()?);
                    if let Some(items) = pending.take() {
                        fresh.try_extend(items).map_err(|e| {
                            de::Error::custom(format_args!("too many elements: {e}"))
                        })?;
                    }
                    list = Some(fresh);
                }
                Field::Items => {
                    if seen_items {
                        return Err(de::Error::duplicate_field("items"));
                    }
                    seen_items = true;
                    match list.as_mut() {
                        Some(l) => a.next_value_seed(ItemsSeed(l))?,
                        None => pending = Some(a.next_value()?),
                    }
                }
            }
        }

        let list = list.ok_or_else(|| de::Error::missing_field("capacity"))?;
        if !seen_items {
            return Err(de::Error::missing_field("items"));
        }
        Ok(list)
    }
}

impl<'de, T, S> Deserialize<'de> for BoundedList<T, S>
where
    T: Deserialize<'de>,
    S: SequenceStore<T>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_struct("BoundedList", LIST_FIELDS, ListVisitor(PhantomData))
    }
}

impl Serialize for OverflowPolicy {
    fn serialize<Z: Serializer>(&self, s: Z) -> Result<Z::Ok, Z::Error> {
        s.serialize_str(self.as_str())
    }
}

const POLICY_NAMES: &[&str] = &["fail"];

struct PolicyVisitor;

impl de::Visitor<'_> for PolicyVisitor {
    type Value = OverflowPolicy;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an overflow policy name")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v {
            "fail" => Ok(OverflowPolicy::Fail),
            other => Err(E::unknown_variant(other, POLICY_NAMES)),
        }
    }
}

impl<'de> Deserialize<'de> for OverflowPolicy {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_str(PolicyVisitor)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{BoundedList, OverflowPolicy};
    use alloc::collections::VecDeque;

    #[test]
    fn test_serde_roundtrip_json() {
        let v: BoundedList<i32> = BoundedList::try_from_iter(5, [1, 2, 3]).unwrap();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, r#"{"capacity":5,"items":[1,2,3]}"#);
        let back: BoundedList<i32> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_serde_roundtrip_deque_store() {
        let v: BoundedList<u8, VecDeque<u8>> = BoundedList::try_from_iter(2, [4]).unwrap();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, r#"{"capacity":2,"items":[4]}"#);
        let back: BoundedList<u8, VecDeque<u8>> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_deserialize_over_capacity_errors() {
        let err = serde_json::from_str::<BoundedList<i32>>(r#"{"capacity":2,"items":[1,2,3]}"#)
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("capacity of 2 exceeded"), "msg: {msg}");
    }

    #[test]
    fn test_deserialize_stops_at_first_element_over_capacity() {
        use core::cell::Cell;
        use serde::{Deserialize, Deserializer};

        std::thread_local! {
            static READ: Cell<usize> = const { Cell::new(0) };
        }

        #[derive(Debug)]
        struct Counted(#[allow(dead_code)] u8);

        impl<'de> Deserialize<'de> for Counted {
            fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                READ.with(|n| n.set(n.get() + 1));
                u8::deserialize(d).map(Counted)
            }
        }

        let mut json = alloc::string::String::from(r#"{"capacity":1,"items":[7"#);
        for _ in 1..10_000 {
            json.push_str(",7");
        }
        json.push_str("]}");

        READ.with(|n| n.set(0));
        let err = serde_json::from_str::<BoundedList<Counted>>(&json).unwrap_err();
        assert!(err.to_string().contains("capacity of 1 exceeded"), "{err}");
        assert!(READ.with(Cell::get) <= 2);
    }

    #[test]
    fn test_deserialize_reports_capacity_before_later_bad_element() {
        let err = serde_json::from_str::<BoundedList<u8>>(r#"{"capacity":1,"items":[1,2,"x"]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("capacity of 1 exceeded"), "{err}");
    }

    #[test]
    fn test_deserialize_items_before_capacity() {
        let v: BoundedList<u8> =
            serde_json::from_str(r#"{"items":[1,2],"capacity":3}"#).unwrap();
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), 3);

        let err = serde_json::from_str::<BoundedList<u8>>(r#"{"items":[1,2],"capacity":1}"#)
            .unwrap_err();
        assert!(err.to_string().contains("capacity of 1 exceeded"), "{err}");
    }

    #[test]
    fn test_deserialize_missing_and_duplicate_fields() {
        let missing = serde_json::from_str::<BoundedList<u8>>(r#"{"capacity":2}"#).unwrap_err();
        assert!(missing.to_string().contains("missing field `items`"), "{missing}");
        let missing = serde_json::from_str::<BoundedList<u8>>(r#"{"items":[]}"#).unwrap_err();
        assert!(missing.to_string().contains("missing field `capacity`"), "{missing}");
        let dup = serde_json::from_str::<BoundedList<u8>>(r#"{"capacity":2,"capacity":3,"items":[]}"#)
            .unwrap_err();
        assert!(dup.to_string().contains("duplicate field `capacity`"), "{dup}");
    }

    #[test]
    fn test_deserialize_rejects_negative_capacity() {
        assert!(serde_json::from_str::<BoundedList<i32>>(r#"{"capacity":-1,"items":[]}"#).is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let res = serde_json::from_str::<BoundedList<i32>>(
            r#"{"capacity":1,"items":[],"policy":"fail"}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_policy_serde() {
        assert_eq!(serde_json::to_string(&OverflowPolicy::Fail).unwrap(), r#""fail""#);
        let p: OverflowPolicy = serde_json::from_str(r#""fail""#).unwrap();
        assert_eq!(p, OverflowPolicy::Fail);
        let err = serde_json::from_str::<OverflowPolicy>(r#""drop_oldest""#).unwrap_err();
        assert!(err.to_string().contains("unknown variant"), "{err}");
    }
}
