use dnstamper_application::ports::QueryIdSource;

/// Query ids drawn from the thread-local CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomQueryIds;

impl QueryIdSource for RandomQueryIds {
    fn next_id(&self) -> u16 {
        rand::random::<u16>()
    }
}
