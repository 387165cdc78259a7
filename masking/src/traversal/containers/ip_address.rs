//! Network addresses: opaque, zeroed to the unspecified address.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};

use super::impl_maskable_opaque;

impl_maskable_opaque!(Ipv4Addr => Ipv4Addr::UNSPECIFIED);
impl_maskable_opaque!(Ipv6Addr => Ipv6Addr::UNSPECIFIED);
impl_maskable_opaque!(IpAddr => IpAddr::V4(Ipv4Addr::UNSPECIFIED));
impl_maskable_opaque!(SocketAddrV4 => SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0));
impl_maskable_opaque!(SocketAddrV6 => SocketAddrV6::new(Ipv6Addr::UNSPECIFIED, 0, 0, 0));
impl_maskable_opaque!(SocketAddr => SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0)));
