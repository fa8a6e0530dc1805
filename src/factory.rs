//! Grouping of independently built collections.
//!
//! Pure plumbing: order and identity are preserved, nothing is validated,
//! and no input (including none at all) can fail.

use crate::model::{AnyContainers, Containers};

/// Group collections over possibly different scalar types.
pub fn containers_list<I>(collections: I) -> Vec<Box<dyn AnyContainers>>
where
    I: IntoIterator<Item = Box<dyn AnyContainers>>,
{
    collections.into_iter().collect()
}

/// Group collections that share one scalar type.
pub fn typed_containers_list<T, I>(collections: I) -> Vec<Containers<T>>
where
    I: IntoIterator<Item = Containers<T>>,
{
    collections.into_iter().collect()
}

/// Box each argument as an untyped collection and group them in order.
///
/// ```
/// use containers_model::{containers_list, Containers};
///
/// let list = containers_list![Containers::<i32>::default(), Containers::<bool>::default()];
/// assert!(list[0].is::<i32>());
/// assert!(list[1].is::<bool>());
/// ```
#[macro_export]
macro_rules! containers_list {
    () => {
        ::std::vec::Vec::<::std::boxed::Box<dyn $crate::AnyContainers>>::new()
    };
    ($($c:expr),+ $(,)?) => {
        $crate::factory::containers_list([
            $(::std::boxed::Box::new($c) as ::std::boxed::Box<dyn $crate::AnyContainers>),+
        ])
    };
}
