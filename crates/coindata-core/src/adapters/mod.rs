mod btc;
mod eth;

pub use btc::BtcSource;
pub use eth::EthSource;
