//! Affiliate link composition.
//!
//! Outbound booking links get the tracking suffix of their network appended.
//! The suffix is concatenated as-is: no encoding and no merging with a query
//! string that may already be present on the base URL.

use crate::models::AffiliateNetworks;

/// Append the UTM suffix configured for `network` to `base_url`.
///
/// Unknown networks leave the URL untouched.
pub fn with_affiliate(base_url: &str, network: &str, networks: &AffiliateNetworks) -> String {
    match networks.get(network) {
        Some(config) => format!("{}{}", base_url, config.utm),
        None => base_url.to_string(),
    }
}
