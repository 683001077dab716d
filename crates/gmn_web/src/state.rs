use gmn_feed::FeedClient;
use gmn_reader::ReaderClient;

/// Shared, read-only per-process state: the two upstream clients.
/// There is deliberately no cache or queue behind these.
pub struct AppState {
    pub feed: FeedClient,
    pub reader: ReaderClient,
}
