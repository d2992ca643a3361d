#![allow(unused_imports)]

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "exact_size_is_empty")] {
        pub(crate) use core::iter::ExactSizeIterator as ExactSizeIsEmpty;
    } else {
        pub(crate) trait ExactSizeIsEmpty: ExactSizeIterator {
            #[inline]
            fn is_empty(&self) -> bool {
                self.len() == 0
            }
        }

        impl<I: ExactSizeIterator> ExactSizeIsEmpty for I {}
    }
}
