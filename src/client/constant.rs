pub const SITE_NAME: &str = "Factly";

/// Prefix of every API request.
pub const API_BASE: &str = "/api/v1";

/// Number of facts requested per feed page. A shorter page means the end of
/// the feed has been reached.
pub const FEED_PAGE_SIZE: usize = 10;
