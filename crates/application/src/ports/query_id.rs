/// Source of transaction ids.
///
/// Ids must be unpredictable to an off-path attacker, since matching the id
/// is all that ties a reply to its query.
pub trait QueryIdSource: Send + Sync {
    fn next_id(&self) -> u16;
}
