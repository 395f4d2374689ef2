//! Entropy readings for `Rand`.
//!
//! On x86_64 and aarch64 every reading is the CPU cycle counter. Elsewhere
//! there is no counter readable from user space, so readings come from the
//! operating system.

#[cfg(target_arch = "x86_64")]
mod imp {
    pub const NAME: &str = "rdtsc";

    #[inline(always)]
    pub fn read() -> u64 {
        unsafe { core::arch::x86_64::_rdtsc() }
    }
}

#[cfg(target_arch = "aarch64")]
mod imp {
    pub const NAME: &str = "cycle counter";

    #[inline(always)]
    pub fn read() -> u64 {
        let cnt: u64;
        unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt) }
        cnt
    }
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
mod imp {
    use rand::TryRngCore;
    use rand::rngs::OsRng;

    pub const NAME: &str = "os entropy";

    #[inline]
    pub fn read() -> u64 {
        // Fall back to the time only if the OS source is unavailable.
        OsRng.try_next_u64().unwrap_or_else(|e| {
            log::warn!("os entropy unavailable: {}", e);
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        })
    }
}

pub fn source_name() -> &'static str {
    imp::NAME
}

#[inline(always)]
pub fn entropy() -> u64 {
    imp::read()
}
