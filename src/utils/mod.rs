use std::io;
use std::net::{IpAddr, ToSocketAddrs};

use if_addrs::get_if_addrs;

use crate::domain::models::NetworkInterface;
use crate::features::resolution::{InterfaceSource, LocalHostLookup};

/// Interfaces as reported by the OS.
pub struct SystemInterfaces;

impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> io::Result<Vec<NetworkInterface>> {
        Ok(group_by_name(
            get_if_addrs()?
                .into_iter()
                .map(|iface| (iface.ip(), iface.name)),
        ))
    }
}

/// Local host name and its resolved address.
pub struct SystemLocalHost;

impl LocalHostLookup for SystemLocalHost {
    fn host_name(&self) -> io::Result<String> {
        let name = hostname::get()?
            .into_string()
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "hostname is not valid UTF-8"))?;
        if name.is_empty() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "empty hostname"));
        }
        Ok(name)
    }

    fn address_of(&self, host_name: &str) -> io::Result<IpAddr> {
        let candidates: Vec<IpAddr> = (host_name, 0).to_socket_addrs()?.map(|a| a.ip()).collect();
        prefer_non_loopback(&candidates).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: no address for host", host_name),
            )
        })
    }
}

/// if-addrs yields one entry per address; fold them into interfaces
/// keeping first-seen order.
fn group_by_name(entries: impl IntoIterator<Item = (IpAddr, String)>) -> Vec<NetworkInterface> {
    let mut grouped: Vec<NetworkInterface> = Vec::new();
    for (ip, name) in entries {
        match grouped.iter_mut().find(|iface| iface.name == name) {
            Some(iface) => iface.addresses.push(ip),
            None => grouped.push(NetworkInterface::new(name, vec![ip])),
        }
    }
    grouped
}

fn prefer_non_loopback(candidates: &[IpAddr]) -> Option<IpAddr> {
    candidates
        .iter()
        .find(|ip| ip.is_ipv4() && !ip.is_loopback())
        .or_else(|| candidates.iter().find(|ip| !ip.is_loopback()))
        .or_else(|| candidates.first())
        .copied()
}
