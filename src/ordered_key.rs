//! Resting place for [OrderedKey] -- the composite key used by every keyed container in this crate.
//!
//! Ordering, equality & hashing are implemented once, here, and nowhere else:
//!   - order: `primary` ascending (absent primaries first), then `secondary` ascending (absent secondaries last);
//!   - equality: both fields equal -- two absent fields being equal;
//!   - hash: `31 * hash(primary) + hash(secondary)`, with wrapping `i32` arithmetic.
//!
//! `secondary` is a float: every NaN is folded into a single canonical NaN (ordered after `+inf`)
//! and `-0.0` is kept distinct from `0.0`, so the three relations above never disagree.

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
};


/// Composite, immutable key: a textual primary discriminator and a numeric secondary measure -- both optional.\
/// Updates produce new values -- see [Self::with_secondary()].
#[derive(Debug, Clone)]
pub struct OrderedKey {
    primary:   Option<String>,
    secondary: Option<f64>,
}

impl OrderedKey {

    /// a key with both fields present
    pub fn new(primary: impl Into<String>, secondary: f64) -> Self {
        Self { primary: Some(primary.into()), secondary: Some(secondary) }
    }

    /// a key with an absent secondary measure
    pub fn primary_only(primary: impl Into<String>) -> Self {
        Self { primary: Some(primary.into()), secondary: None }
    }

    /// a key from any combination of present / absent fields
    pub fn from_parts(primary: Option<String>, secondary: Option<f64>) -> Self {
        Self { primary, secondary }
    }

    pub fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    pub fn secondary(&self) -> Option<f64> {
        self.secondary
    }

    /// returns a new key sharing this key's primary, but with the given `secondary`
    pub fn with_secondary(&self, secondary: Option<f64>) -> Self {
        Self { primary: self.primary.clone(), secondary }
    }

    /// The total order every ordered container relies on -- see the module docs
    pub fn compare(&self, other: &Self) -> Ordering {
        let primary_ordering = match (&self.primary, &other.primary) {
            (None,    None)    => Ordering::Equal,
            (None,    Some(_)) => Ordering::Less,
            (Some(_), None)    => Ordering::Greater,
            (Some(a), Some(b)) => a.cmp(b),
        };
        if primary_ordering != Ordering::Equal {
            return primary_ordering
        }
        match (self.secondary, other.secondary) {
            (None,    None)    => Ordering::Equal,
            (None,    Some(_)) => Ordering::Greater,
            (Some(_), None)    => Ordering::Less,
            (Some(a), Some(b)) => canonical(a).total_cmp(&canonical(b)),
        }
    }

    /// Order-sensitive hash code, consistent with equality: `31 * h(primary) + h(secondary)`.\
    /// `h(primary)` is the classic polynomial string hash over UTF-16 code units; `h(secondary)` folds
    /// the float's 64 bits into 32 -- an absent field hashes to `0`.
    pub fn hash_code(&self) -> i32 {
        let primary_hash = self.primary.as_deref()
            .map_or(0, |primary| primary.encode_utf16()
                .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32)));
        let secondary_hash = self.secondary
            .map_or(0, |secondary| {
                let bits = canonical(secondary).to_bits();
                (bits ^ (bits >> 32)) as i32
            });
        primary_hash.wrapping_mul(31).wrapping_add(secondary_hash)
    }
}

/// Folds every NaN into the same bit pattern, so equality, order & hash see a single NaN
fn canonical(value: f64) -> f64 {
    if value.is_nan() { f64::NAN } else { value }
}

impl PartialEq for OrderedKey {
    fn eq(&self, other: &Self) -> bool {
        self.primary == other.primary &&
        self.secondary.map(|secondary| canonical(secondary).to_bits()) == other.secondary.map(|secondary| canonical(secondary).to_bits())
    }
}
impl Eq for OrderedKey {}

impl PartialOrd for OrderedKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}
impl Ord for OrderedKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for OrderedKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl Display for OrderedKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (&self.primary, self.secondary) {
            (Some(primary), Some(secondary)) => write!(f, "Key{{primary='{primary}', secondary={secondary}}}"),
            (Some(primary), None)            => write!(f, "Key{{primary='{primary}'}}"),
            (None,          Some(secondary)) => write!(f, "Key{{secondary={secondary}}}"),
            (None,          None)            => write!(f, "Key{{}}"),
        }
    }
}


#[cfg(test)]
mod tests {

    //! Unit tests for [ordered_key](super) module

    use super::*;
    use std::collections::{hash_map::DefaultHasher, HashMap};

    fn std_hash(key: &OrderedKey) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn primary_decides_first() {
        assert_eq!(OrderedKey::new("Bell", 99.0).compare(&OrderedKey::new("Star", 1.0)), Ordering::Less);
        assert_eq!(OrderedKey::new("Star", 1.0).compare(&OrderedKey::new("Bell", 99.0)), Ordering::Greater);
    }

    #[test]
    fn secondary_breaks_ties() {
        assert_eq!(OrderedKey::new("Star", 15.2).compare(&OrderedKey::new("Star", 20.3)), Ordering::Less);
        assert_eq!(OrderedKey::new("Star", 20.3).compare(&OrderedKey::new("Star", 15.2)), Ordering::Greater);
        assert_eq!(OrderedKey::new("Star", 15.2).compare(&OrderedKey::new("Star", 15.2)), Ordering::Equal);
    }

    #[test]
    fn absent_primary_sorts_first() {
        let absent = OrderedKey::from_parts(None, Some(1.0));
        assert_eq!(absent.compare(&OrderedKey::new("", 0.0)), Ordering::Less);
        assert_eq!(OrderedKey::new("", 0.0).compare(&absent), Ordering::Greater);
        assert_eq!(absent.compare(&OrderedKey::from_parts(None, Some(1.0))), Ordering::Equal);
    }

    #[test]
    fn absent_secondary_sorts_last_on_primary_ties() {
        let absent  = OrderedKey::primary_only("Star");
        let present = OrderedKey::new("Star", f64::MAX);
        assert_eq!(absent.compare(&present), Ordering::Greater);
        assert_eq!(present.compare(&absent), Ordering::Less);
        assert_ne!(absent, present, "one absent secondary must not make the keys equal");
        assert_eq!(absent, OrderedKey::primary_only("Star"));
    }

    #[test]
    fn equal_keys_hash_alike() {
        let a = OrderedKey::new("Star", 15.2);
        let b = OrderedKey::new(String::from("Star"), 15.2);
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
        assert_eq!(std_hash(&a), std_hash(&b));
        // NaNs are folded into one
        let nan_a = OrderedKey::new("x", f64::NAN);
        let nan_b = OrderedKey::new("x", -f64::NAN);
        assert_eq!(nan_a, nan_b);
        assert_eq!(nan_a.compare(&nan_b), Ordering::Equal);
        assert_eq!(nan_a.hash_code(), nan_b.hash_code());
    }

    #[test]
    fn hash_is_order_sensitive_mix() {
        // "ab" = 97*31 + 98 = 3105
        let key = OrderedKey::primary_only("ab");
        assert_eq!(key.hash_code(), 3105 * 31);
        assert_eq!(OrderedKey::from_parts(None, None).hash_code(), 0);
        let bits = 1.5f64.to_bits();
        assert_eq!(OrderedKey::from_parts(None, Some(1.5)).hash_code(), (bits ^ (bits >> 32)) as i32);
    }

    #[test]
    fn updates_produce_new_keys() {
        let original = OrderedKey::new("Star", 15.2);
        let updated  = original.with_secondary(Some(16.0));
        assert_eq!(original.secondary(), Some(15.2));
        assert_eq!(updated.secondary(),  Some(16.0));
        assert_eq!(updated.primary(),    Some("Star"));
    }

    #[test]
    fn hash_map_finds_equal_keys() {
        let mut map = HashMap::new();
        map.insert(OrderedKey::new("Star", 15.2), "Oksana");
        map.insert(OrderedKey::new("Star", 15.2), "Myroslav");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&OrderedKey::new("Star", 15.2)), Some(&"Myroslav"));
    }

    #[test]
    fn display() {
        assert_eq!(OrderedKey::new("Star", 15.2).to_string(), "Key{primary='Star', secondary=15.2}");
        assert_eq!(OrderedKey::primary_only("Star").to_string(), "Key{primary='Star'}");
    }
}
