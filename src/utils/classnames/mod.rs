//! CSS-style class name composition.
//!
//! Fragments are strings, `(name, enabled)` toggles, or nested lists of
//! either. Empty fragments are dropped and whitespace is collapsed.

/// One piece of a class name list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassName<'a> {
    Name(&'a str),
    Toggle(&'a str, bool),
    List(Vec<ClassName<'a>>),
}

impl<'a> From<&'a str> for ClassName<'a> {
    fn from(name: &'a str) -> Self {
        ClassName::Name(name)
    }
}

impl<'a> From<Option<&'a str>> for ClassName<'a> {
    fn from(name: Option<&'a str>) -> Self {
        ClassName::Name(name.unwrap_or_default())
    }
}

impl<'a> From<(&'a str, bool)> for ClassName<'a> {
    fn from((name, enabled): (&'a str, bool)) -> Self {
        ClassName::Toggle(name, enabled)
    }
}

impl<'a, T: Into<ClassName<'a>>> From<Vec<T>> for ClassName<'a> {
    fn from(items: Vec<T>) -> Self {
        ClassName::List(items.into_iter().map(Into::into).collect())
    }
}

impl ClassName<'_> {
    fn collect_into<'s>(&'s self, out: &mut Vec<&'s str>) {
        match self {
            ClassName::Name(name) => out.extend(name.split_whitespace()),
            ClassName::Toggle(name, true) => out.extend(name.split_whitespace()),
            ClassName::Toggle(_, false) => {}
            ClassName::List(items) => items.iter().for_each(|item| item.collect_into(out)),
        }
    }
}

/// Join class name fragments into a single space-separated string.
///
/// # Examples
/// ```
/// use rust_week_calendar::class_names;
///
/// let first = true;
/// assert_eq!(class_names!["ek-rwc-header", ("first", first), ""], "ek-rwc-header first");
/// ```
pub fn class_names<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = ClassName<'a>>,
{
    let fragments: Vec<ClassName<'a>> = fragments.into_iter().collect();
    let mut names = Vec::new();
    for fragment in &fragments {
        fragment.collect_into(&mut names);
    }
    names.join(" ")
}

/// `class_names` over heterogeneous fragments.
#[macro_export]
macro_rules! class_names {
    ($($fragment:expr),* $(,)?) => {
        $crate::utils::classnames::class_names(vec![
            $($crate::utils::classnames::ClassName::from($fragment)),*
        ])
    };
}
