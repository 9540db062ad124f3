pub mod envelope;
pub mod file_store;
pub mod http_auth;
pub mod http_trip;
pub mod navigator;
pub mod recommendation;

pub use file_store::FileTokenStore;
pub use http_auth::HttpAuthAdapter;
pub use http_trip::HttpTripAdapter;
pub use navigator::TerminalNavigator;
pub use recommendation::HttpRecommendationAdapter;
