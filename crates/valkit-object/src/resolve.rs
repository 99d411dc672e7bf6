// SPDX-License-Identifier: MIT OR Apache-2.0
//! Null-safe nested path resolution

use serde_json::Value;
use tracing::trace;
use valkit_core::{PATH_SEPARATOR, ValuePath, member};

/// Anything that can name a path into a value.
///
/// Text is split on `.`; slices, arrays and vectors of strings are taken as
/// already split. `None` and the empty string name no path at all.
pub trait PathSource {
    /// The segments to walk, or `None` when there is no path
    fn segments(&self) -> Option<Box<dyn Iterator<Item = &str> + '_>>;
}

impl PathSource for str {
    fn segments(&self) -> Option<Box<dyn Iterator<Item = &str> + '_>> {
        if self.is_empty() {
            None
        } else {
            Some(Box::new(self.split(PATH_SEPARATOR)))
        }
    }
}

impl PathSource for String {
    fn segments(&self) -> Option<Box<dyn Iterator<Item = &str> + '_>> {
        self.as_str().segments()
    }
}

impl PathSource for ValuePath {
    fn segments(&self) -> Option<Box<dyn Iterator<Item = &str> + '_>> {
        Some(Box::new(ValuePath::segments(self).iter().map(String::as_str)))
    }
}

impl<S: AsRef<str>> PathSource for [S] {
    fn segments(&self) -> Option<Box<dyn Iterator<Item = &str> + '_>> {
        Some(Box::new(self.iter().map(AsRef::as_ref)))
    }
}

impl<S: AsRef<str>, const N: usize> PathSource for [S; N] {
    fn segments(&self) -> Option<Box<dyn Iterator<Item = &str> + '_>> {
        self.as_slice().segments()
    }
}

impl<S: AsRef<str>> PathSource for Vec<S> {
    fn segments(&self) -> Option<Box<dyn Iterator<Item = &str> + '_>> {
        self.as_slice().segments()
    }
}

impl<P: PathSource> PathSource for Option<P> {
    fn segments(&self) -> Option<Box<dyn Iterator<Item = &str> + '_>> {
        self.as_ref().and_then(|path| path.segments())
    }
}

impl<P: PathSource + ?Sized> PathSource for &P {
    fn segments(&self) -> Option<Box<dyn Iterator<Item = &str> + '_>> {
        (**self).segments()
    }
}

/// Resolve `path` against `root`.
///
/// Walks one segment at a time and stops with `None` at the first segment
/// that is missing or that meets a value with no members (null, a scalar).
/// A JSON `null` at the end of the path is returned as `Some(&Value::Null)`.
/// A pre-split path with no segments resolves to `root` itself.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use valkit_object::resolve_path;
///
/// let doc = json!({"a": {"b": 5}});
/// assert_eq!(resolve_path("a.b", &doc), Some(&json!(5)));
/// assert_eq!(resolve_path(&["a", "b"], &doc), Some(&json!(5)));
/// assert_eq!(resolve_path("a.c", &doc), None);
/// assert_eq!(resolve_path("", &doc), None);
/// ```
#[must_use]
pub fn resolve_path<'v, P>(path: &P, root: &'v Value) -> Option<&'v Value>
where
    P: PathSource + ?Sized,
{
    let Some(mut segments) = path.segments() else {
        trace!("no path given");
        return None;
    };
    let resolved = segments.try_fold(root, |value, segment| member(value, segment));
    if resolved.is_none() {
        trace!("path did not resolve");
    }
    resolved
}
