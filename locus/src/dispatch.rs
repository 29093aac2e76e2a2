//! Hand-off from traversal to view dispatch.
//!
//! Locus stops at producing a [`Resolution`]. Finding and invoking a view for
//! it belongs to the application, which plugs in through [`ViewDispatcher`].
//! The request object is threaded through untouched; the traverser never
//! looks at it.

use crate::error::Result;
use crate::traversal::{Resolution, Traverser};

/// Consumer of traversal results.
///
/// Closures of the form `Fn(Resolution, &R) -> Result<O>` implement this
/// trait, which is usually all an application needs.
pub trait ViewDispatcher<R: ?Sized> {
    /// What dispatching produces (a response, a rendered page, ...).
    type Output;

    /// Act on a resolution for `request`.
    ///
    /// # Errors
    ///
    /// Implementations decide what is an error; a non-empty view name with
    /// no matching view is the typical "not found" case.
    fn dispatch(&self, resolution: Resolution, request: &R) -> Result<Self::Output>;
}

impl<R, O, F> ViewDispatcher<R> for F
where
    R: ?Sized,
    F: Fn(Resolution, &R) -> Result<O>,
{
    type Output = O;

    fn dispatch(&self, resolution: Resolution, request: &R) -> Result<O> {
        self(resolution, request)
    }
}

/// Traverse `path` and hand the result to `dispatcher` along with `request`.
///
/// # Errors
///
/// Returns lookup failures from traversal and whatever the dispatcher
/// returns.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use locus::{publish, Folder, Resolution, Result, Traverser};
///
/// struct Request {
///     user: &'static str,
/// }
///
/// let traverser = Traverser::new(Arc::new(Folder::located()));
/// let request = Request { user: "ada" };
///
/// let greeting = publish(&traverser, "/@@hello", &request, &|r: Resolution, req: &Request| -> Result<String> {
///     Ok(format!("{} {}", r.view_name, req.user))
/// })
/// .unwrap();
/// assert_eq!(greeting, "hello ada");
/// ```
pub fn publish<R, D>(
    traverser: &Traverser,
    path: &str,
    request: &R,
    dispatcher: &D,
) -> Result<D::Output>
where
    R: ?Sized,
    D: ViewDispatcher<R>,
{
    let resolution = traverser.traverse(path)?;
    dispatcher.dispatch(resolution, request)
}
