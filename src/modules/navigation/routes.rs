/// Route of the search list
pub const MOVIES: &str = "movies";
/// Route of the details view
pub const MOVIES_DETAILS: &str = "movies/details";

/// Route commands as handed to a `Navigator`
pub fn commands(route: &str) -> Vec<String> {
    vec![route.to_string()]
}
