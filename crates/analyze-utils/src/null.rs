/// Returns `true` if `value` holds something.
///
/// Takes `&Option<T>` so it can be passed straight to [`Iterator::filter`]:
///
/// ```
/// use analyze_utils::is_not_null;
///
/// let names = [Some("setup"), None, Some("props")];
/// let present: Vec<_> = names.iter().filter(|v| is_not_null(*v)).flatten().collect();
/// assert_eq!(present, [&"setup", &"props"]);
/// ```
pub fn is_not_null<T>(value: &Option<T>) -> bool {
    value.is_some()
}
