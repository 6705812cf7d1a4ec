use core::marker::PhantomData;

/// A marker type that is invariant in its lifetime parameter `'id`.
///
/// Brands must not be subtyped (shrunk) by the compiler, otherwise handles
/// minted by two different vertex spaces could be unified under one brand.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct InvariantLifetime<'id>(PhantomData<fn(&'id ()) -> &'id ()>);

impl<'id> InvariantLifetime<'id> {
    pub(crate) const fn new() -> Self {
        Self(PhantomData)
    }
}
