use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::reflect::{Associative, Key, Reflect, Shape};
use crate::trace::key_segment;

type Entries<'a> = Vec<(&'a dyn Key, &'a dyn Reflect)>;

/// Map view for a concrete map type: `get` resolves a key downcast back to `K`,
/// and `$order` fixes the order `entries` are walked in.
macro_rules! impl_reflect_map {
    ($order:path; impl<$($g:ident),*> $map:ty where K: $($bound:path),+) => {
        impl<K, V, $($g),*> Associative for $map
        where
            K: Key + $($bound +)+ 'static,
            V: Reflect,
            $($g: BuildHasher,)*
        {
            fn len(&self) -> usize {
                self.len()
            }

            fn entries(&self) -> Vec<(&dyn Key, &dyn Reflect)> {
                $order(
                    self.iter()
                        .map(|(k, v)| (k as &dyn Key, v as &dyn Reflect))
                        .collect(),
                )
            }

            fn lookup(&self, key: &dyn Key) -> Option<&dyn Reflect> {
                let key = key.as_any().downcast_ref::<K>()?;
                self.get(key).map(|v| v as &dyn Reflect)
            }
        }

        impl<K, V, $($g),*> Reflect for $map
        where
            K: Key + $($bound +)+ 'static,
            V: Reflect,
            $($g: BuildHasher,)*
        {
            fn shape(&self) -> Shape<'_> {
                Shape::Map(self)
            }
        }
    };
}

/// Hash maps iterate in a per-instance random order, so they are walked by
/// rendered key. Keys that render alike keep their hash order.
fn by_key_segment(mut entries: Entries<'_>) -> Entries<'_> {
    entries.sort_by_cached_key(|(key, _)| key_segment(key.as_reflect()));
    entries
}

impl_reflect_map!(by_key_segment; impl<S> HashMap<K, V, S> where K: Eq, Hash);
impl_reflect_map!(std::convert::identity; impl<> BTreeMap<K, V> where K: Ord);
#[cfg(feature = "indexmap")]
impl_reflect_map!(std::convert::identity; impl<S> indexmap::IndexMap<K, V, S> where K: Eq, Hash);
