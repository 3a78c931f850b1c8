use ahash::RandomState;
use linked_hash_set::LinkedHashSet;

pub mod grid;
pub(crate) mod range_set;

pub use self::grid::Grid;
pub(crate) use self::range_set::RangeSet;

pub(crate) type LinkedAHashSet<T> = LinkedHashSet<T, RandomState>;
