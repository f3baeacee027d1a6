#![no_std]
#![deny(warnings, missing_debug_implementations, missing_docs)]

//! A processor yield hint for busy-wait spin loops.
//!
//! Concurrency primitives that poll instead of blocking spend time in loops
//! that do no useful work while they wait for another core to make progress.
//! [`spin_loop`] lets such a loop tell the processor what it is doing: the
//! executing core can briefly deprioritize the current hardware thread,
//! which saves power and frees pipeline bandwidth for a sibling
//! hyperthread; on some microarchitectures it also avoids a memory-order
//! mis-speculation penalty when the loop finally exits. The OS scheduler is
//! never involved;
//! the calling thread does not block and does not give up its quantum.
//!
//! The instruction to emit is chosen once, at compile time, from the target
//! architecture: `pause` on x86 and x86-64 (through the SSE2 intrinsic when
//! the toolchain exposes it, raw assembly otherwise) and `yield` on ARMv8-A
//! in both its 64-bit and 32-bit instruction sets. Targets outside that set
//! fail the build with a diagnostic rather than silently getting a no-op or
//! a fence, so a port to a new architecture has to say which instruction it
//! wants.
//!
//! The crate is `no_std` and has no runtime state of any kind, so the hint
//! is callable from kernels and freestanding runtimes as well as from
//! ordinary hosted programs.
//!
//! ## Using the hint
//!
//! A minimal flag handshake. The waiting side hints on every iteration of
//! its polling loop:
//!
//! ```
//! use spin_hint::spin_loop;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let ready = Arc::new(AtomicBool::new(false));
//! let ready2 = Arc::clone(&ready);
//!
//! let worker = thread::spawn(move || {
//!     // ... produce something ...
//!     ready2.store(true, Ordering::Release);
//! });
//!
//! while !ready.load(Ordering::Acquire) {
//!     spin_loop();
//! }
//!
//! worker.join().unwrap();
//! ```
//!
//! ## What the hint is not
//!
//! * **Not a memory barrier.** It provides no cross-thread visibility
//!   guarantee. The example above still needs its `Release`/`Acquire` pair;
//!   the hint only keeps the compiler from moving memory operations across
//!   the call site, and emits no fence instruction.
//! * **Not a thread yield.** `std::thread::yield_now` gives up the OS
//!   scheduling quantum; this primitive returns after a few cycles without
//!   entering the kernel. A loop that can spin for a long time should
//!   escalate to a real yield or to parking, which is policy left to the
//!   caller.
//! * **Not adaptive.** There is no backoff counter and no runtime CPU
//!   feature detection. Callers own their retry policy; this crate only
//!   supplies the instruction each retry wants to issue.

pub mod hint;

pub use hint::spin_loop;
