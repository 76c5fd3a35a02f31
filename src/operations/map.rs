//! Operations over the associative view: [OrderedKey] -> payload, without duplicate keys.\
//! They work on any [KeyedMap] -- implemented here for `HashMap` (which relies on the key's equality & hash)
//! and for `BTreeMap` (which relies on the key's order).

use std::collections::{BTreeMap, HashMap};
use crate::ordered_key::OrderedKey;


/// The map operations needed by this module, over the containers able to hold [OrderedKey]s
pub trait KeyedMap<V> {
    /// the container's name, as shown in reports
    const KIND: &'static str;
    fn lookup(&self, key: &OrderedKey) -> Option<&V>;
    /// inserts or overwrites, returning the previous payload
    fn upsert(&mut self, key: OrderedKey, value: V) -> Option<V>;
    fn evict(&mut self, key: &OrderedKey) -> Option<V>;
    /// keeps only the entries for which `keep` returns `true`
    fn retain_entries(&mut self, keep: &mut dyn FnMut(&OrderedKey, &V) -> bool);
    fn entries(&self) -> Box<dyn Iterator<Item=(&OrderedKey, &V)> + '_>;
    fn entry_count(&self) -> usize;
}

impl<V> KeyedMap<V> for HashMap<OrderedKey, V> {
    const KIND: &'static str = "HashMap";
    fn lookup(&self, key: &OrderedKey) -> Option<&V> {
        self.get(key)
    }
    fn upsert(&mut self, key: OrderedKey, value: V) -> Option<V> {
        self.insert(key, value)
    }
    fn evict(&mut self, key: &OrderedKey) -> Option<V> {
        self.remove(key)
    }
    fn retain_entries(&mut self, keep: &mut dyn FnMut(&OrderedKey, &V) -> bool) {
        self.retain(|key, value| keep(key, value))
    }
    fn entries(&self) -> Box<dyn Iterator<Item=(&OrderedKey, &V)> + '_> {
        Box::new(self.iter())
    }
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<V> KeyedMap<V> for BTreeMap<OrderedKey, V> {
    const KIND: &'static str = "BTreeMap";
    fn lookup(&self, key: &OrderedKey) -> Option<&V> {
        self.get(key)
    }
    fn upsert(&mut self, key: OrderedKey, value: V) -> Option<V> {
        self.insert(key, value)
    }
    fn evict(&mut self, key: &OrderedKey) -> Option<V> {
        self.remove(key)
    }
    fn retain_entries(&mut self, keep: &mut dyn FnMut(&OrderedKey, &V) -> bool) {
        self.retain(|key, value| keep(key, value))
    }
    fn entries(&self) -> Box<dyn Iterator<Item=(&OrderedKey, &V)> + '_> {
        Box::new(self.iter())
    }
    fn entry_count(&self) -> usize {
        self.len()
    }
}


/// Looks `key` up -- `None` if absent (or if the map is empty)
pub fn find_by_key<'a, V>(map: &'a impl KeyedMap<V>, key: &OrderedKey) -> Option<&'a V> {
    map.lookup(key)
}

/// Finds an entry whose payload equals `value`: entries are sorted by payload, then binary searched.\
/// With several matching entries, any one of them may be returned.
pub fn find_by_value<V: Ord + Clone>(map: &impl KeyedMap<V>, value: &V) -> Option<(OrderedKey, V)> {
    let entries = sort_by_value(map);
    entries.binary_search_by(|(_key, payload)| payload.cmp(value))
        .ok()
        .map(|position| entries[position].clone())
}

/// Inserts `key -> value`, overwriting -- and returning -- any previous payload: the map never grows on existing keys
pub fn insert_entry<V>(map: &mut impl KeyedMap<V>, key: OrderedKey, value: V) -> Option<V> {
    map.upsert(key, value)
}

/// Removes the entry for `key` -- at most one -- returning its payload
pub fn delete_by_key<V>(map: &mut impl KeyedMap<V>, key: &OrderedKey) -> Option<V> {
    map.evict(key)
}

/// Removes every entry whose payload equals `value`, returning how many were removed
pub fn delete_by_value<V: PartialEq>(map: &mut impl KeyedMap<V>, value: &V) -> usize {
    let original_len = map.entry_count();
    map.retain_entries(&mut |_key: &OrderedKey, payload: &V| payload != value);
    original_len - map.entry_count()
}

/// A new vector with the entries in ascending key order
pub fn sort_by_key<V: Clone>(map: &impl KeyedMap<V>) -> Vec<(OrderedKey, V)> {
    let mut entries: Vec<(OrderedKey, V)> = map.entries()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    entries.sort_by(|(a, _), (b, _)| a.compare(b));
    entries
}

/// A new vector with the entries in ascending payload order -- stable: entries with equal payloads keep their key order
pub fn sort_by_value<V: Ord + Clone>(map: &impl KeyedMap<V>) -> Vec<(OrderedKey, V)> {
    let mut entries = sort_by_key(map);
    entries.sort_by(|(_, a), (_, b)| a.cmp(b));
    entries
}


#[cfg(test)]
mod tests {

    //! Unit tests for [map](super) module

    use super::*;

    fn registry() -> HashMap<OrderedKey, String> {
        [
            (OrderedKey::new("A", 1.0), "x"),
            (OrderedKey::new("B", 2.0), "y"),
            (OrderedKey::new("C", 3.0), "x"),
        ]
        .into_iter()
        .map(|(key, owner)| (key, owner.to_string()))
        .collect()
    }

    #[test]
    fn insert_overwrites_existing_keys() {
        let mut map = registry();
        assert_eq!(insert_entry(&mut map, OrderedKey::new("B", 2.0), "z".to_string()), Some("y".to_string()));
        assert_eq!(map.len(), 3, "overwriting must not grow the map");
        assert_eq!(find_by_key(&map, &OrderedKey::new("B", 2.0)), Some(&"z".to_string()));
        assert_eq!(insert_entry(&mut map, OrderedKey::new("D", 4.0), "w".to_string()), None);
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn delete_by_value_removes_every_match() {
        let mut map = registry();
        assert_eq!(delete_by_value(&mut map, &"x".to_string()), 2);
        assert_eq!(map.len(), 1);
        assert!(map.contains_key(&OrderedKey::new("B", 2.0)));
        assert_eq!(delete_by_value(&mut map, &"x".to_string()), 0);
    }

    #[test]
    fn delete_by_key_removes_at_most_one() {
        let mut map: BTreeMap<OrderedKey, String> = registry().into_iter().collect();
        assert_eq!(delete_by_key(&mut map, &OrderedKey::new("A", 1.0)), Some("x".to_string()));
        assert_eq!(delete_by_key(&mut map, &OrderedKey::new("A", 1.0)), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn keys_differing_only_in_secondary_are_distinct() {
        let mut map: HashMap<OrderedKey, i32> = HashMap::new();
        insert_entry(&mut map, OrderedKey::new("Star", 15.2), 1);
        insert_entry(&mut map, OrderedKey::new("Star", 20.3), 2);
        insert_entry(&mut map, OrderedKey::primary_only("Star"), 3);
        assert_eq!(map.len(), 3);
        let keys: Vec<Option<f64>> = sort_by_key(&map).iter().map(|(key, _)| key.secondary()).collect();
        assert_eq!(keys, vec![Some(15.2), Some(20.3), None]);
    }

    #[test]
    fn find_by_value_binary_searches_payloads() {
        let map = registry();
        let (key, owner) = find_by_value(&map, &"y".to_string()).unwrap();
        assert_eq!((key, owner.as_str()), (OrderedKey::new("B", 2.0), "y"));
        let (key, _) = find_by_value(&map, &"x".to_string()).unwrap();
        assert!(key == OrderedKey::new("A", 1.0) || key == OrderedKey::new("C", 3.0));
        assert_eq!(find_by_value(&map, &"q".to_string()), None);
        assert_eq!(find_by_value(&HashMap::<OrderedKey, String>::new(), &"x".to_string()), None);
    }

    #[test]
    fn sorting_produces_new_vectors() {
        let map = registry();
        let by_key: Vec<String> = sort_by_key(&map).into_iter().filter_map(|(key, _)| key.primary().map(str::to_string)).collect();
        assert_eq!(by_key, vec!["A", "B", "C"]);
        let by_value: Vec<(String, String)> = sort_by_value(&map).into_iter()
            .map(|(key, owner)| (key.primary().unwrap_or_default().to_string(), owner))
            .collect();
        assert_eq!(by_value, vec![("A".to_string(), "x".to_string()), ("C".to_string(), "x".to_string()), ("B".to_string(), "y".to_string())]);
        assert_eq!(map.len(), 3, "sorting must not touch the map");
    }
}
