pub mod channel;

pub use channel::{ChannelStatus, LiveFeed};
