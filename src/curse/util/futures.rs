// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

//! Future-related utility code lives here.

use futures::Future;

// Converts a concrete object implementing the `Future` trait into a `Box`ed
// trait object, so that functions built from differently-typed combinator
// chains can all return the same type.
//
// The future is pinned on the heap so the boxed value stays `Unpin` and can
// be handed straight to `Runtime::block_on`.
pub fn into_future_trait<F, I, E>(f: F) -> Box<dyn Future<Output = Result<I, E>> + Send + Unpin>
where
    F: 'static + Send + Future<Output = Result<I, E>>,
{
    Box::new(Box::pin(f))
}
