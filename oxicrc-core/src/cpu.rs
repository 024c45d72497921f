//! Hardware capability detection.
//!
//! The probe runs once per process. Setting `OXICRC_NO_SIMD` to anything other
//! than an empty string or `0` forces the table engine everywhere, which is
//! how the fold path is disabled for debugging or comparison runs.

use std::sync::OnceLock;

/// Environment variable that disables carry-less multiplication.
pub const NO_SIMD_ENV: &str = "OXICRC_NO_SIMD";

static CLMUL_AVAILABLE: OnceLock<bool> = OnceLock::new();

/// Whether the fold engine can run on this CPU.
///
/// The answer is computed on first use and cached for the process lifetime.
pub fn hardware_acceleration_available() -> bool {
    *CLMUL_AVAILABLE.get_or_init(|| {
        let disabled = simd_disabled_by_env();
        let detected = !disabled && detect();
        tracing::debug!(
            detected,
            disabled,
            arch = std::env::consts::ARCH,
            "carry-less multiply capability"
        );
        detected
    })
}

/// Whether `OXICRC_NO_SIMD` is set to a value that disables the fold engine.
pub fn simd_disabled_by_env() -> bool {
    std::env::var_os(NO_SIMD_ENV).is_some_and(|value| env_flag_set(&value.to_string_lossy()))
}

fn env_flag_set(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

#[cfg(target_arch = "x86_64")]
fn detect() -> bool {
    crate::simd::x86::is_supported()
}

#[cfg(target_arch = "aarch64")]
fn detect() -> bool {
    crate::simd::arm::is_supported()
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
fn detect() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_is_stable() {
        let first = hardware_acceleration_available();
        for _ in 0..10 {
            assert_eq!(hardware_acceleration_available(), first);
        }
    }

    #[test]
    fn test_capability_across_threads() {
        let expected = hardware_acceleration_available();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(hardware_acceleration_available))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn test_env_flag_values() {
        assert!(!env_flag_set(""));
        assert!(!env_flag_set("0"));
        assert!(env_flag_set("1"));
        assert!(env_flag_set("yes"));
    }

    #[test]
    fn test_capability_implies_detection() {
        if hardware_acceleration_available() {
            assert!(detect());
        }
    }
}
