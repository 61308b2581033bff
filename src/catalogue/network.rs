// CLASSIFICATION: COMMUNITY
// Filename: network.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-08-20

use crate::field::{Field, ReadWrite};
use crate::namespace::Root;

const CTL_NET: i32 = 4;
const PF_INET: i32 = 2;
#[cfg(any(target_os = "freebsd", target_os = "dragonfly"))]
const PF_INET6: i32 = 28;
#[cfg(not(any(target_os = "freebsd", target_os = "dragonfly")))]
const PF_INET6: i32 = 30;

const IPCTL_FORWARDING: i32 = 1;
const IPCTL_SENDREDIRECTS: i32 = 2;
const IPCTL_DEFTTL: i32 = 3;
const ICMPCTL_MASKREPL: i32 = 1;
const UDPCTL_CHECKSUM: i32 = 1;
const IPV6CTL_FORWARDING: i32 = 1;
const IPV6CTL_SENDREDIRECTS: i32 = 2;
const ICMPV6CTL_REDIRACCEPT: i32 = 2;
const ICMPV6CTL_REDIRTIMEOUT: i32 = 3;

crate::namespace! {
    /// The networking namespace (`net`).
    pub struct Networking: Root = "net", mib = CTL_NET;
}

crate::namespace! {
    /// IPv4 protocol family (`net.inet`).
    pub struct Inet: Networking = "inet", mib = PF_INET;
}

crate::namespace! {
    /// IPv4 (`net.inet.ip`).
    pub struct InetIp: Inet = "ip";
}

crate::namespace! {
    /// ICMP (`net.inet.icmp`).
    pub struct InetIcmp: Inet = "icmp";
}

crate::namespace! {
    /// UDP over IPv4 (`net.inet.udp`).
    pub struct InetUdp: Inet = "udp";
}

crate::namespace! {
    /// IPv6 protocol family (`net.inet6`).
    pub struct Inet6: Networking = "inet6", mib = PF_INET6;
}

crate::namespace! {
    /// IPv6 (`net.inet6.ip6`).
    pub struct Inet6Ip: Inet6 = "ip6";
}

crate::namespace! {
    /// ICMPv6 (`net.inet6.icmp6`).
    pub struct Inet6Icmp: Inet6 = "icmp6";
}

impl Networking {
    /// IPv4 values (`inet`).
    pub fn inet(&self) -> Inet {
        Inet
    }

    /// IPv6 values (`inet6`).
    pub fn inet6(&self) -> Inet6 {
        Inet6
    }
}

impl Inet {
    /// IP values (`ip`).
    pub fn ip(&self) -> InetIp {
        InetIp
    }

    /// ICMP values (`icmp`).
    pub fn icmp(&self) -> InetIcmp {
        InetIcmp
    }

    /// UDP values (`udp`).
    pub fn udp(&self) -> InetUdp {
        InetUdp
    }
}

impl InetIp {
    /// Packet forwarding between interfaces (`forwarding`).
    pub fn forwarding(&self) -> Field<Self, bool, ReadWrite> {
        Field::new(IPCTL_FORWARDING, "forwarding")
    }

    /// Sending of ICMP redirects (`redirect`).
    pub fn send_redirects(&self) -> Field<Self, bool, ReadWrite> {
        Field::new(IPCTL_SENDREDIRECTS, "redirect")
    }

    /// Default time to live (`ttl`).
    pub fn default_ttl(&self) -> Field<Self, i32, ReadWrite> {
        Field::new(IPCTL_DEFTTL, "ttl")
    }
}

impl InetIcmp {
    /// Answering ICMP address mask requests (`maskrepl`).
    pub fn mask_reply(&self) -> Field<Self, bool, ReadWrite> {
        Field::new(ICMPCTL_MASKREPL, "maskrepl")
    }

    /// Answering broadcast echo requests (`bmcastecho`).
    pub fn broadcast_echo(&self) -> Field<Self, bool, ReadWrite> {
        Field::named("bmcastecho")
    }
}

impl InetUdp {
    /// UDP checksumming (`checksum`).
    pub fn checksum(&self) -> Field<Self, bool, ReadWrite> {
        Field::new(UDPCTL_CHECKSUM, "checksum")
    }
}

impl Inet6 {
    /// IPv6 values (`ip6`).
    pub fn ip6(&self) -> Inet6Ip {
        Inet6Ip
    }

    /// ICMPv6 values (`icmp6`).
    pub fn icmp6(&self) -> Inet6Icmp {
        Inet6Icmp
    }
}

impl Inet6Ip {
    /// Packet forwarding between interfaces (`forwarding`).
    pub fn forwarding(&self) -> Field<Self, bool, ReadWrite> {
        Field::new(IPV6CTL_FORWARDING, "forwarding")
    }

    /// Sending of ICMPv6 redirects (`redirect`).
    pub fn send_redirects(&self) -> Field<Self, bool, ReadWrite> {
        Field::new(IPV6CTL_SENDREDIRECTS, "redirect")
    }
}

impl Inet6Icmp {
    /// Accepting ICMPv6 redirects (`rediraccept`).
    pub fn accept_redirects(&self) -> Field<Self, bool, ReadWrite> {
        Field::new(ICMPV6CTL_REDIRACCEPT, "rediraccept")
    }

    /// Lifetime of redirect routes in seconds (`redirtimeout`).
    pub fn redirect_timeout(&self) -> Field<Self, i32, ReadWrite> {
        Field::new(ICMPV6CTL_REDIRTIMEOUT, "redirtimeout")
    }
}

impl Root {
    /// The networking values (`net`).
    pub fn networking(&self) -> Networking {
        Networking
    }
}
