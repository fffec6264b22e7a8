/// Case-insensitive substring match of `query` against any of `fields`.
///
/// An empty query matches everything.
pub fn matches_any(query: &str, fields: &[&str]) -> bool {
    let query = query.to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

/// Anything that can be narrowed by the search box of a list view.
pub trait Searchable {
    fn matches(&self, query: &str) -> bool;
}

/// Keep the records matching `query`, preserving backend order.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items.iter().filter(|item| item.matches(query)).collect()
}

/// Render key for a row: the backend id when present, else the position.
pub fn display_key(id: Option<&str>, index: usize) -> String {
    match id {
        Some(id) => id.to_string(),
        None => index.to_string(),
    }
}
