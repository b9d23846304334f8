//! Types the comparator refuses to walk.
//!
//! Interior-mutable cells cannot hand out a borrow that outlives the call to
//! `shape`, raw pointers may dangle, and channels have no observable contents.

use std::cell::{Cell, RefCell};
use std::sync::mpsc::{Receiver, Sender, SyncSender};

use crate::reflect::{Reflect, Shape};

macro_rules! impl_reflect_unsupported {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<T: ?Sized> Reflect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Unsupported
                }
            }
        )+
    };
}

impl_reflect_unsupported!(*const T, *mut T, Cell<T>, RefCell<T>);

macro_rules! impl_reflect_channel {
    ($($ty:ident),+) => {
        $(
            impl<T> Reflect for $ty<T> {
                fn shape(&self) -> Shape<'_> {
                    Shape::Unsupported
                }
            }
        )+
    };
}

impl_reflect_channel!(Sender, SyncSender, Receiver);
