//! Ready-made benchmark suites for the container views of a value sequence: each suite builds its view out of
//! the caller's data & times every operation of [crate::operations] over it, with a shared [BenchmarkConfig].\
//! Mutating operations either work on a fresh clone, per iteration, or restore the container before returning
//! -- so every iteration sees a container of the same size.

use std::{
    collections::BTreeSet,
    fmt::Debug,
};
use tracing::{info, warn};
use crate::{
    configs::BenchmarkConfig,
    errors::BenchError,
    operations::{
        sequence,
        set,
        map::{self, KeyedMap},
        priority::MinPriorityQueue,
    },
    ordered_key::OrderedKey,
    runners::standard::benchmark_operation,
    statistics::types::BenchmarkResult,
    values::ScalarValue,
};


/// The keys & payloads exercised by [benchmark_map()]
#[derive(Debug, Clone, PartialEq)]
pub struct MapScenario<V> {
    /// the key to look up & to remove (then restore)
    pub search_key:   OrderedKey,
    /// the key to insert (then remove)
    pub key_to_add:   OrderedKey,
    /// the payload to look up & to remove entries by
    pub search_value: V,
    /// the payload inserted along with `key_to_add`
    pub value_to_add: V,
}


/// Times the operations over a plain sequence of `values`, searching for (and deleting) `target`:
/// linear & binary searches, min/max scan, sorting, appending, sorted insertion & deletions
pub fn benchmark_sequence<T: ScalarValue>(values: &[T],
                                          target: &T,
                                          config: BenchmarkConfig)
                                         -> Result<Vec<BenchmarkResult>, BenchError> {
    info!("Benchmarking the list operations over {} {} values", values.len(), T::TYPE_NAME);
    let label = format!("List<{}>", T::TYPE_NAME);
    warn_if_empty(values.is_empty(), &label);
    let sorted_values = sequence::sort(values);
    let mut list = values.to_vec();
    let mut sorted_list = sorted_values.clone();
    Ok(vec![
        benchmark_operation(&format!("{label} linear search"), config, || sequence::linear_search(values, target))?,
        benchmark_operation(&format!("{label} binary search"), config, || sequence::binary_search(&sorted_values, target))?,
        benchmark_operation(&format!("{label} min/max scan"), config, || sequence::min_max(values).is_some())?,
        benchmark_operation(&format!("{label} sort"), config, || sequence::sort(values))?,
        benchmark_operation(&format!("{label} insert"), config, || {
            sequence::insert(&mut list, target.clone());
            list.pop()
        })?,
        benchmark_operation(&format!("{label} sorted insert"), config, || {
            let position = sequence::insert_sorted(&mut sorted_list, target.clone());
            sorted_list.remove(position)
        })?,
        benchmark_operation(&format!("{label} delete one"), config, || {
            let mut list = values.to_vec();
            sequence::delete_one(&mut list, target)
        })?,
        benchmark_operation(&format!("{label} delete by value"), config, || {
            let mut list = values.to_vec();
            sequence::delete_by_value(&mut list, target)
        })?,
    ])
}

/// Times the operations over a min-heap built out of `values`: peeking, polling (then pushing back),
/// searching, min/max scan & deleting every `target`
pub fn benchmark_priority_queue<T: ScalarValue>(values: &[T],
                                                target: &T,
                                                config: BenchmarkConfig)
                                               -> Result<Vec<BenchmarkResult>, BenchError> {
    info!("Benchmarking the priority queue operations over {} {} values", values.len(), T::TYPE_NAME);
    let label = format!("Queue<{}>", T::TYPE_NAME);
    warn_if_empty(values.is_empty(), &label);
    let queue = MinPriorityQueue::from_values(values);
    let mut restorable_queue = queue.clone();
    Ok(vec![
        benchmark_operation(&format!("{label} peek"), config, || queue.peek().cloned())?,
        benchmark_operation(&format!("{label} poll & push"), config, || {
            let root = restorable_queue.poll();
            if let Some(root) = &root {
                restorable_queue.push(root.clone());
            }
            root
        })?,
        benchmark_operation(&format!("{label} push & delete"), config, || {
            let mut queue = queue.clone();
            queue.push(target.clone());
            queue.delete_by_value(target)
        })?,
        benchmark_operation(&format!("{label} search"), config, || queue.search(target))?,
        benchmark_operation(&format!("{label} min/max scan"), config, || queue.min_max().is_some())?,
        benchmark_operation(&format!("{label} delete by value"), config, || {
            let mut queue = queue.clone();
            queue.delete_by_value(target)
        })?,
    ])
}

/// Times the operations over an ordered set built out of `values`: searching, min/max scan,
/// inserting & deleting `target` (each undone right after), ordered traversal & the cross-check of `values` against the set
pub fn benchmark_set<T: ScalarValue>(values: &[T],
                                     target: &T,
                                     config: BenchmarkConfig)
                                    -> Result<Vec<BenchmarkResult>, BenchError> {
    info!("Benchmarking the set operations over {} {} values", values.len(), T::TYPE_NAME);
    let label = format!("Set<{}>", T::TYPE_NAME);
    warn_if_empty(values.is_empty(), &label);
    let values_set: BTreeSet<T> = set::from_values(values);
    let mut restorable_set = values_set.clone();
    let mut results = vec![
        benchmark_operation(&format!("{label} search"), config, || set::search(&values_set, target))?,
        benchmark_operation(&format!("{label} min/max scan"), config, || set::min_max(&values_set).is_some())?,
        benchmark_operation(&format!("{label} sorted traversal"), config, || set::sorted(&values_set))?,
        benchmark_operation(&format!("{label} contains all"), config, || set::contains_all(&values_set, values))?,
    ];
    results.push(benchmark_operation(&format!("{label} insert"), config, || {
        let inserted = set::insert(&mut restorable_set, target.clone());
        if inserted {
            set::delete(&mut restorable_set, target);
        }
        inserted
    })?);
    results.push(benchmark_operation(&format!("{label} delete"), config, || {
        let deleted = set::delete(&mut restorable_set, target);
        if deleted {
            set::insert(&mut restorable_set, target.clone());
        }
        deleted
    })?);
    Ok(results)
}

/// Times the operations over the keyed `entries` map, as described by `scenario`: lookups by key & by value,
/// insertion & deletions (each undone right after, except for deleting by value, which works on clones)
/// and the sortings by key & by value
pub fn benchmark_map<V: Ord + Clone + Debug,
                     M: KeyedMap<V> + Clone>
                    (entries:  &M,
                     scenario: &MapScenario<V>,
                     config:   BenchmarkConfig)
                    -> Result<Vec<BenchmarkResult>, BenchError> {
    info!("Benchmarking the {} operations over {} entries", M::KIND, entries.entry_count());
    let label = M::KIND;
    warn_if_empty(entries.entry_count() == 0, label);
    let mut restorable_map = entries.clone();
    let mut results = vec![
        benchmark_operation(&format!("{label} find by key"), config, || map::find_by_key(entries, &scenario.search_key).is_some())?,
        benchmark_operation(&format!("{label} find by value"), config, || map::find_by_value(entries, &scenario.search_value))?,
    ];
    results.push(benchmark_operation(&format!("{label} insert"), config, || {
        let previous = map::insert_entry(&mut restorable_map, scenario.key_to_add.clone(), scenario.value_to_add.clone());
        match &previous {
            Some(previous) => { map::insert_entry(&mut restorable_map, scenario.key_to_add.clone(), previous.clone()); },
            None           => { map::delete_by_key(&mut restorable_map, &scenario.key_to_add); },
        }
        previous
    })?);
    results.push(benchmark_operation(&format!("{label} delete by key"), config, || {
        let removed = map::delete_by_key(&mut restorable_map, &scenario.search_key);
        if let Some(removed) = &removed {
            map::insert_entry(&mut restorable_map, scenario.search_key.clone(), removed.clone());
        }
        removed
    })?);
    results.extend([
        benchmark_operation(&format!("{label} delete by value"), config, || {
            let mut entries = entries.clone();
            map::delete_by_value(&mut entries, &scenario.search_value)
        })?,
        benchmark_operation(&format!("{label} sort by key"), config, || map::sort_by_key(entries))?,
        benchmark_operation(&format!("{label} sort by value"), config, || map::sort_by_value(entries))?,
    ]);
    Ok(results)
}

fn warn_if_empty(is_empty: bool, label: &str) {
    if is_empty {
        warn!("Benchmarking an empty {label}: searches will find nothing & scans will yield no extremes");
    }
}
