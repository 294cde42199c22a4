use proptest::collection;
use proptest::prelude::*;
use seq_list::{Error, SeqList};

fn value_vec() -> impl Strategy<Value = Vec<i32>> {
    collection::vec(-50i32..50, 0..40)
}

fn from_vec(values: &[i32]) -> SeqList<i32> {
    values.iter().cloned().collect()
}

fn to_vec(list: &SeqList<i32>) -> Vec<i32> {
    list.iter().cloned().collect()
}

#[derive(Debug, Clone)]
enum Op {
    PushBack(i32),
    PushFront(i32),
    Insert(usize, i32),
    Remove(usize),
    Set(usize, i32),
    PopBack,
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::PushBack),
        any::<i32>().prop_map(Op::PushFront),
        (0usize..50, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        (0usize..50).prop_map(Op::Remove),
        (0usize..50, any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
        Just(Op::PopBack),
        Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn prop_set_then_get(values in value_vec(), index in 0usize..40, value in any::<i32>()) {
        let mut list = from_vec(&values);
        let len = list.len();

        if index < len {
            prop_assert_eq!(list.set(index, value), Ok(values[index]));
            prop_assert_eq!(list.get(index), Ok(&value));
        } else {
            prop_assert_eq!(list.set(index, value), Err(Error::IndexOutOfRange { index, len }));
        }
        prop_assert_eq!(list.len(), len);
    }

    #[test]
    fn prop_insert_shifts_back(values in value_vec(), index in 0usize..41, value in any::<i32>()) {
        let mut list = from_vec(&values);
        let mut model = values.clone();

        if index <= model.len() {
            list.insert(index, value).expect("index was in range");
            model.insert(index, value);
            prop_assert_eq!(list.get(index), Ok(&value));
        } else {
            prop_assert!(list.insert(index, value).is_err());
        }
        prop_assert_eq!(&to_vec(&list), &model);
        prop_assert_eq!(list.back(), model.last());
    }

    #[test]
    fn prop_remove_shifts_forward(values in value_vec(), index in 0usize..40) {
        let mut list = from_vec(&values);
        let mut model = values.clone();

        if index < model.len() {
            prop_assert_eq!(list.remove(index), Ok(model.remove(index)));
        } else {
            prop_assert_eq!(list.remove(index), Err(Error::IndexOutOfRange { index, len: model.len() }));
        }
        prop_assert_eq!(&to_vec(&list), &model);
        prop_assert_eq!(list.back(), model.last());
    }

    #[test]
    fn prop_push_back_is_insert_at_len(values in value_vec(), value in any::<i32>()) {
        let mut appended = from_vec(&values);
        let mut inserted = from_vec(&values);

        appended.push_back(value);
        let len = inserted.len();
        inserted.insert(len, value).expect("`len` is a valid insertion index");
        prop_assert_eq!(appended, inserted);
    }

    #[test]
    fn prop_index_of_finds_first(values in value_vec(), value in -50i32..50) {
        let list = from_vec(&values);

        prop_assert_eq!(list.index_of(&value), values.iter().position(|&v| v == value));
    }

    #[test]
    fn prop_equal_lists_hash_equal(values in value_vec()) {
        let lhs = from_vec(&values);
        let rhs = from_vec(&values);

        prop_assert_eq!(&lhs, &rhs);
        prop_assert_eq!(lhs.hash_code(), rhs.hash_code());
    }

    #[test]
    fn prop_render_matches_values(values in value_vec()) {
        let rendered = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");

        prop_assert_eq!(from_vec(&values).to_string(), format!("[{}]", rendered));
    }

    #[test]
    fn prop_matches_vec_model(ops in collection::vec(op_strategy(), 0..60)) {
        let mut list = SeqList::new();
        let mut model = Vec::new();

        for op in ops {
            match op {
                Op::PushBack(v) => { list.push_back(v); model.push(v) },
                Op::PushFront(v) => { list.push_front(v); model.insert(0, v) },
                Op::Insert(i, v) => {
                    let ok = list.insert(i, v).is_ok();
                    prop_assert_eq!(ok, i <= model.len());
                    if ok { model.insert(i, v) }
                },
                Op::Remove(i) => {
                    let removed = list.remove(i).ok();
                    let expected = if i < model.len() { Some(model.remove(i)) } else { None };
                    prop_assert_eq!(removed, expected);
                },
                Op::Set(i, v) => {
                    let old = list.set(i, v).ok();
                    let expected = model.get_mut(i).map(|slot| std::mem::replace(slot, v));
                    prop_assert_eq!(old, expected);
                },
                Op::PopBack => prop_assert_eq!(list.pop_back(), model.pop()),
                Op::Clear => { list.clear(); model.clear() },
            }

            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.is_empty(), model.is_empty());
            prop_assert_eq!(list.front(), model.first());
            prop_assert_eq!(list.back(), model.last());
        }
        prop_assert_eq!(to_vec(&list), model);
    }
}
