//! Positional arguments passed to factories at resolution time

/// A tuple of positional arguments a factory can be registered with.
///
/// Implemented for `()` and tuples of up to three `'static` values.
pub trait Arguments: 'static {
    /// Number of arguments in the tuple
    const ARITY: usize;
}

impl Arguments for () {
    const ARITY: usize = 0;
}

macro_rules! define_arguments {
    ($arity:literal; $($T: ident),+) => {
        impl<$($T: 'static),+> Arguments for ($($T,)+) {
            const ARITY: usize = $arity;
        }
    }
}

define_arguments! { 1; T1 }
define_arguments! { 2; T1, T2 }
define_arguments! { 3; T1, T2, T3 }
