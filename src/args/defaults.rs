use std::net::{IpAddr, Ipv4Addr};

/// Built-in round-robin DNS server pool, used when no `--dns-server` flags
/// override it.
pub const DEFAULT_DNS_POOL: [IpAddr; 24] = [
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 83)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 84)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 85)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 86)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 87)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 88)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 89)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 90)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 91)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 92)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 93)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 94)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 95)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 96)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 97)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 98)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 99)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 100)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 160)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 161)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 162)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 163)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 164)),
    IpAddr::V4(Ipv4Addr::new(192, 168, 11, 165)),
];
