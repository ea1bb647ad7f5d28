//! Name resolution: human-facing name → canonical name handed to ssh.
//!
//! A forward lookup followed by a reverse lookup of the first address turns
//! a CNAME into the name the target actually answers to, which is what
//! ssh_config entries are usually keyed on.

use std::io;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};

use thiserror::Error;

use crate::config::LaunchConfig;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("failed to resolve '{host}': {source}")]
    Lookup {
        host: String,
        #[source]
        source: io::Error,
    },

    #[error("'{host}' resolved to no addresses")]
    NoAddress { host: String },

    #[error("reverse lookup of {addr} (for '{host}') failed: {message}")]
    Reverse {
        host: String,
        addr: IpAddr,
        message: String,
    },
}

/// Maps the name the user typed to the name the launched program gets.
pub trait Resolver {
    fn canonical_name(&self, host: &str) -> Result<String, ResolveError>;
}

/// System resolver (getaddrinfo + getnameinfo). Blocking, no deadline.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl Resolver for SystemResolver {
    fn canonical_name(&self, host: &str) -> Result<String, ResolveError> {
        let addr = (host, 0)
            .to_socket_addrs()
            .map_err(|source| ResolveError::Lookup {
                host: host.to_string(),
                source,
            })?
            .next()
            .ok_or_else(|| ResolveError::NoAddress {
                host: host.to_string(),
            })?;

        let name = reverse_lookup(addr).map_err(|message| ResolveError::Reverse {
            host: host.to_string(),
            addr: addr.ip(),
            message,
        })?;
        tracing::debug!(host, %addr, canonical = %name, "resolved host");
        Ok(name)
    }
}

impl<R: Resolver + ?Sized> Resolver for Box<R> {
    fn canonical_name(&self, host: &str) -> Result<String, ResolveError> {
        (**self).canonical_name(host)
    }
}

/// Hands the name through untouched. Picked by [`resolver_for`] when
/// `launch.resolve_names` is off.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl Resolver for IdentityResolver {
    fn canonical_name(&self, host: &str) -> Result<String, ResolveError> {
        Ok(host.to_string())
    }
}

/// The resolver the `nssh` binary runs with.
pub fn resolver_for(launch: &LaunchConfig) -> Box<dyn Resolver> {
    if launch.resolve_names {
        Box::new(SystemResolver)
    } else {
        tracing::debug!("name resolution disabled");
        Box::new(IdentityResolver)
    }
}

#[cfg(unix)]
fn reverse_lookup(addr: SocketAddr) -> Result<String, String> {
    use std::ffi::CStr;
    use std::mem::{size_of, MaybeUninit};

    const HOST_BUF_LEN: usize = 1025;
    let mut buf = [0 as libc::c_char; HOST_BUF_LEN];

    // SAFETY: the sockaddr structs are zero-initialised then filled field by
    // field, and `buf` outlives the call with its length passed alongside.
    let rc = unsafe {
        match addr {
            SocketAddr::V4(v4) => {
                let mut sin = MaybeUninit::<libc::sockaddr_in>::zeroed().assume_init();
                sin.sin_family = libc::AF_INET as libc::sa_family_t;
                sin.sin_port = v4.port().to_be();
                sin.sin_addr.s_addr = u32::from_ne_bytes(v4.ip().octets());
                libc::getnameinfo(
                    &sin as *const libc::sockaddr_in as *const libc::sockaddr,
                    size_of::<libc::sockaddr_in>() as libc::socklen_t,
                    buf.as_mut_ptr(),
                    HOST_BUF_LEN as libc::socklen_t,
                    std::ptr::null_mut(),
                    0,
                    libc::NI_NAMEREQD,
                )
            }
            SocketAddr::V6(v6) => {
                let mut sin6 = MaybeUninit::<libc::sockaddr_in6>::zeroed().assume_init();
                sin6.sin6_family = libc::AF_INET6 as libc::sa_family_t;
                sin6.sin6_port = v6.port().to_be();
                sin6.sin6_addr.s6_addr = v6.ip().octets();
                libc::getnameinfo(
                    &sin6 as *const libc::sockaddr_in6 as *const libc::sockaddr,
                    size_of::<libc::sockaddr_in6>() as libc::socklen_t,
                    buf.as_mut_ptr(),
                    HOST_BUF_LEN as libc::socklen_t,
                    std::ptr::null_mut(),
                    0,
                    libc::NI_NAMEREQD,
                )
            }
        }
    };

    if rc != 0 {
        // SAFETY: gai_strerror returns a static NUL-terminated string.
        let message = unsafe { CStr::from_ptr(libc::gai_strerror(rc)) };
        return Err(message.to_string_lossy().into_owned());
    }

    // SAFETY: getnameinfo NUL-terminates `buf` on success.
    let name = unsafe { CStr::from_ptr(buf.as_ptr()) };
    Ok(name.to_string_lossy().into_owned())
}

#[cfg(not(unix))]
fn reverse_lookup(addr: SocketAddr) -> Result<String, String> {
    // No getnameinfo binding here; the address itself is still a valid target
    Ok(addr.ip().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_resolver_passes_name_through() {
        assert_eq!(
            IdentityResolver.canonical_name("db1.example").unwrap(),
            "db1.example"
        );
    }

    #[test]
    fn resolve_names_off_selects_identity() {
        let launch = LaunchConfig {
            resolve_names: false,
            ..LaunchConfig::default()
        };
        let resolver = resolver_for(&launch);
        assert_eq!(
            resolver.canonical_name("no-such-host.invalid").unwrap(),
            "no-such-host.invalid"
        );
    }

    #[test]
    fn unresolvable_name_is_an_error() {
        let err = SystemResolver
            .canonical_name("no-such-host.invalid")
            .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::Lookup { .. } | ResolveError::NoAddress { .. }
        ));
    }
}
