//! Synthetic private-network addresses.

use std::net::Ipv4Addr;

use rand::Rng;

/// Fixed leading octets of every synthetic address.
const NETWORK_PREFIX: [u8; 2] = [192, 168];

/// Generates a `192.168.A.B` address with `A` and `B` drawn uniformly from
/// `1..=255`.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use traffic_data::synthetic_ip;
///
/// let ip = synthetic_ip(&mut ChaCha8Rng::seed_from_u64(1));
/// let [first, second, _, fourth] = ip.octets();
/// assert_eq!((first, second), (192, 168));
/// assert_ne!(fourth, 0);
/// ```
pub fn synthetic_ip<R>(rng: &mut R) -> Ipv4Addr
where
    R: Rng + ?Sized,
{
    let [first, second] = NETWORK_PREFIX;
    let third = rng.random_range(1..=u8::MAX);
    let fourth = rng.random_range(1..=u8::MAX);
    Ipv4Addr::new(first, second, third, fourth)
}
