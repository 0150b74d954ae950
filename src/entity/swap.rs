use alloy::primitives::{Address, U256};
use chrono::Utc;

/// Arguments of a `swapExactIn` submission. `deadline` is a Unix timestamp
/// enforced on-chain; this workflow never interprets it locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    pub router: Address,
    pub amount_in: U256,
    pub amount_out_min: U256,
    pub path: Vec<Address>,
    pub recipient: Address,
    pub deadline: U256,
}

/// Unix timestamp `secs` seconds from now, for the swap deadline field.
pub fn deadline_in(secs: u64) -> u64 {
    Utc::now().timestamp() as u64 + secs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_is_strictly_in_the_future() {
        let now = Utc::now().timestamp() as u64;
        assert!(deadline_in(1200) > now);
    }

    #[test]
    fn deadline_offset_is_applied() {
        let now = Utc::now().timestamp() as u64;
        let deadline = deadline_in(3600);
        assert!(deadline >= now + 3600);
        // allow a couple of seconds of clock movement between the two reads
        assert!(deadline <= now + 3602);
    }
}
