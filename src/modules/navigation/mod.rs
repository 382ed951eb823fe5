pub mod history_router;
pub mod navigator;
pub mod routes;

pub use history_router::HistoryRouter;
pub use navigator::Navigator;
