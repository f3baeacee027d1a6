//! The processor hint issued inside busy-wait spin loops.
//!
//! This module is the entire core of the crate: [`spin_loop`] emits a single
//! "pause/yield" instruction telling the executing core that the current
//! logical thread is polling in a tight loop. Which instruction is emitted is
//! decided once, at compile time, from the target's `cfg` values; there is no
//! runtime detection, no runtime state, and no fallback for targets the
//! dispatch below does not recognize.

// Exactly one branch of this chain defines `relax`; the order is part of the
// contract. On x86 the SSE2 intrinsic takes priority over the raw-assembly
// encoding of the same instruction. Cross-compiling for anything outside the
// recognized set must fail here, at build time, never degrade to a no-op or
// a fence.
cfg_if::cfg_if! {
    if #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2"))] {
        #[inline(always)]
        #[allow(unused_unsafe)]
        fn relax() {
            // SAFETY: `pause` has no preconditions and no architectural
            // effect; processors that predate the hint execute it as
            // `rep nop`.
            #[cfg(target_arch = "x86")]
            unsafe {
                core::arch::x86::_mm_pause()
            };
            #[cfg(target_arch = "x86_64")]
            unsafe {
                core::arch::x86_64::_mm_pause()
            };
        }
    } else if #[cfg(any(target_arch = "x86", target_arch = "x86_64"))] {
        // x86 toolchains without SSE2 intrinsics. `pause` assembles to the
        // same bytes as `rep; nop`.
        #[inline(always)]
        fn relax() {
            // No `nomem`: the compiler must keep surrounding memory
            // operations on their side of the hint and must not drop it as
            // dead code. Still not a fence; no ordering is imposed on other
            // cores.
            unsafe { core::arch::asm!("pause", options(nostack, preserves_flags)) };
        }
    } else if #[cfg(any(target_arch = "aarch64", all(target_arch = "arm", target_feature = "v8")))] {
        // ARMv8-A, both the 64-bit and 32-bit instruction sets.
        #[inline(always)]
        fn relax() {
            // Same constraint as the x86 assembly path: compiler-level
            // ordering only, no fence.
            unsafe { core::arch::asm!("yield", options(nostack, preserves_flags)) };
        }
    } else {
        compile_error!(
            "no processor yield instruction is known for this target architecture; \
             spin-hint supports x86, x86_64, aarch64, and ARMv8-A arm targets"
        );
    }
}

/// Emits a machine instruction to signal the processor that it is running in
/// a busy-wait spin loop ("spin lock").
///
/// The core may respond by briefly deprioritizing the current hardware
/// thread, reducing power draw and contention with the sibling hyperthread
/// while the loop waits. Control returns to the caller after a few cycles;
/// the calling thread never blocks and never enters the kernel, so its
/// scheduling quantum is untouched.
///
/// This is a hint, not a synchronization operation. It imposes no
/// cross-thread memory ordering, so a spin loop still needs its own
/// acquire/release discipline on the predicate it polls:
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
///
/// fn wait_for(flag: &AtomicBool) {
///     while !flag.load(Ordering::Acquire) {
///         spin_hint::spin_loop();
///     }
/// }
///
/// let flag = AtomicBool::new(true);
/// wait_for(&flag);
/// ```
#[inline(always)]
pub fn spin_loop() {
    relax();
}
