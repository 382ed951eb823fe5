use crate::shared::errors::AppResult;

/// Port for route navigation
/// Takes the route as a path array, e.g. `["movies/details"]`
pub trait Navigator: Send + Sync {
    fn navigate(&self, commands: Vec<String>) -> AppResult<()>;
}
