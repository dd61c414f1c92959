//! [`Handler`] abstractions.

use std::future::Future;

/// Asynchronous handler of an operation described by `Args`.
///
/// Every seam between the view state and the outer world (REST API, queries,
/// commands) is expressed as a [`Handler`] of some operation type, so fakes
/// can be substituted in tests.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}

impl<T, Args> Handler<Args> for &T
where
    T: Handler<Args> + ?Sized,
{
    type Ok = T::Ok;
    type Err = T::Err;

    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>> {
        (**self).execute(args)
    }
}
