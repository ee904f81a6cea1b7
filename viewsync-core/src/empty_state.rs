// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::{BTreeMap, HashMap, VecDeque};

/// Domain definition of "request succeeded but there is nothing to show".
///
/// A widget whose fetch returns data for which `is_empty_state()` is `true` renders
/// its empty panel instead of its regular content. Collections are empty when they
/// hold no elements; domain types decide for themselves (e.g. a KPI summary whose
/// metrics are all zero).
///
/// # Example
///
/// ```
/// use viewsync_core::EmptyState;
///
/// struct Totals {
///     revenue: f64,
///     orders: u64,
/// }
///
/// impl EmptyState for Totals {
///     fn is_empty_state(&self) -> bool {
///         self.revenue == 0.0 && self.orders == 0
///     }
/// }
///
/// assert!(Totals { revenue: 0.0, orders: 0 }.is_empty_state());
/// assert!(!vec![1, 2, 3].is_empty_state());
/// assert!(None::<Vec<u8>>.is_empty_state());
/// ```
pub trait EmptyState {
    /// Returns `true` if there is no content to render
    fn is_empty_state(&self) -> bool;
}

impl<T> EmptyState for Vec<T> {
    fn is_empty_state(&self) -> bool {
        self.is_empty()
    }
}

impl<T> EmptyState for VecDeque<T> {
    fn is_empty_state(&self) -> bool {
        self.is_empty()
    }
}

impl<T> EmptyState for [T] {
    fn is_empty_state(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> EmptyState for HashMap<K, V, S> {
    fn is_empty_state(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> EmptyState for BTreeMap<K, V> {
    fn is_empty_state(&self) -> bool {
        self.is_empty()
    }
}

impl EmptyState for String {
    fn is_empty_state(&self) -> bool {
        self.trim().is_empty()
    }
}

impl EmptyState for str {
    fn is_empty_state(&self) -> bool {
        self.trim().is_empty()
    }
}

impl<T: EmptyState> EmptyState for Option<T> {
    fn is_empty_state(&self) -> bool {
        self.as_ref().map_or(true, EmptyState::is_empty_state)
    }
}

impl<T: EmptyState + ?Sized> EmptyState for Box<T> {
    fn is_empty_state(&self) -> bool {
        (**self).is_empty_state()
    }
}

impl<T: EmptyState + ?Sized> EmptyState for std::sync::Arc<T> {
    fn is_empty_state(&self) -> bool {
        (**self).is_empty_state()
    }
}

macro_rules! impl_empty_state_for_numbers {
    ($($ty:ty),*) => {
        $(
            impl EmptyState for $ty {
                fn is_empty_state(&self) -> bool {
                    *self == (0 as $ty)
                }
            }
        )*
    };
}

impl_empty_state_for_numbers!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
