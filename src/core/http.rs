//! Request headers shared by every CPL endpoint

use crate::Result;
use rand::seq::SliceRandom;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};

pub const ORIGIN_VALUE: &str = "https://canpl.ca";
pub const REFERER_VALUE: &str = "https://canpl.ca/";
pub const ACCEPT_VALUE: &str = "application/json, text/javascript, */*; q=0.01";

pub const USER_AGENTS: [&str; 3] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/134.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/15.1 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/92.0.4515.131 Safari/537.36",
];

/// Pick one browser User-Agent from the pool.
pub fn random_user_agent() -> &'static str {
    USER_AGENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(USER_AGENTS[0])
}

/// Static Origin/Referer/Accept headers plus the given User-Agent.
pub fn default_header_map(user_agent: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ORIGIN, HeaderValue::from_static(ORIGIN_VALUE));
    h.insert(REFERER, HeaderValue::from_static(REFERER_VALUE));
    h.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    h.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header_map_contains_static_headers() {
        let headers = default_header_map(USER_AGENTS[1]).unwrap();

        assert_eq!(headers.get(ORIGIN).unwrap(), ORIGIN_VALUE);
        assert_eq!(headers.get(REFERER).unwrap(), REFERER_VALUE);
        assert_eq!(headers.get(ACCEPT).unwrap(), ACCEPT_VALUE);
        assert_eq!(headers.get(USER_AGENT).unwrap(), USER_AGENTS[1]);
    }

    #[test]
    fn test_default_header_map_rejects_invalid_user_agent() {
        let result = default_header_map("bad\nagent");
        assert!(matches!(result, Err(crate::CplError::InvalidHeader(_))));
    }

    #[test]
    fn test_random_user_agent_comes_from_pool() {
        for _ in 0..20 {
            let ua = random_user_agent();
            assert!(USER_AGENTS.contains(&ua));
        }
    }
}
