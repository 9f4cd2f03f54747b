use sales_insights::AsyncSalesSdk;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The async SDK. Owns the record store that every handler reads and
    /// `/api/initialize-database` refreshes.
    pub sdk: AsyncSalesSdk,
}
