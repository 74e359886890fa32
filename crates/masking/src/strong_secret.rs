//!
//! Secret which is wiped from memory when dropped.
//!

use std::{fmt, marker::PhantomData};

use zeroize::Zeroize;

use crate::{strategy::Strategy, PeekInterface};

///
/// Secret thing which is zeroized on drop. Used for card numbers and security codes.
///
pub struct StrongSecret<S: Zeroize, I = crate::WithType>
where
    I: Strategy<S>,
{
    pub(crate) inner_secret: S,
    pub(crate) marker: PhantomData<I>,
}

impl<S: Zeroize, I> StrongSecret<S, I>
where
    I: Strategy<S>,
{
    /// Take ownership of a secret value
    pub fn new(secret: S) -> Self {
        Self {
            inner_secret: secret,
            marker: PhantomData,
        }
    }
}

impl<S: Zeroize, I> PeekInterface<S> for StrongSecret<S, I>
where
    I: Strategy<S>,
{
    fn peek(&self) -> &S {
        &self.inner_secret
    }
}

impl<S: Zeroize, I> From<S> for StrongSecret<S, I>
where
    I: Strategy<S>,
{
    fn from(secret: S) -> Self {
        Self::new(secret)
    }
}

impl<S: Clone + Zeroize, I> Clone for StrongSecret<S, I>
where
    I: Strategy<S>,
{
    fn clone(&self) -> Self {
        Self::new(self.inner_secret.clone())
    }
}

impl<S, I> PartialEq for StrongSecret<S, I>
where
    S: PartialEq + Zeroize,
    I: Strategy<S>,
{
    fn eq(&self, other: &Self) -> bool {
        self.peek().eq(other.peek())
    }
}

impl<S, I> Eq for StrongSecret<S, I>
where
    S: Eq + Zeroize,
    I: Strategy<S>,
{
}

impl<S: Zeroize, I> fmt::Debug for StrongSecret<S, I>
where
    I: Strategy<S>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        I::fmt(&self.inner_secret, f)
    }
}

impl<S: Zeroize, I> fmt::Display for StrongSecret<S, I>
where
    I: Strategy<S>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        I::fmt(&self.inner_secret, f)
    }
}

impl<S: Zeroize + Default, I> Default for StrongSecret<S, I>
where
    I: Strategy<S>,
{
    fn default() -> Self {
        S::default().into()
    }
}

impl<S: Zeroize, I> Drop for StrongSecret<S, I>
where
    I: Strategy<S>,
{
    fn drop(&mut self) {
        self.inner_secret.zeroize();
    }
}
